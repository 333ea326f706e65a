//! Scripted exports without the terminal UI.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use quailcalc_core::{FarmInputs, Snapshot, analyze, write_sensitivity_csv};

/// What to produce when running without the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessRequest {
    /// Print the snapshot JSON
    pub snapshot: bool,
    /// Write the sensitivity CSV here; `-` means the output stream
    pub export_csv: Option<PathBuf>,
}

impl HeadlessRequest {
    pub fn is_empty(&self) -> bool {
        !self.snapshot && self.export_csv.is_none()
    }
}

/// Compute once and write the requested exports.
pub fn run<W: Write>(inputs: &FarmInputs, request: &HeadlessRequest, mut out: W) -> color_eyre::Result<()> {
    let (results, sensitivity) = analyze(inputs);

    if let Some(path) = &request.export_csv {
        if path == Path::new("-") {
            write_sensitivity_csv(&sensitivity, &mut out)?;
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("creating {}", parent.display()))?;
            }
            let file = fs::File::create(path)
                .wrap_err_with(|| format!("creating {}", path.display()))?;
            write_sensitivity_csv(&sensitivity, file)?;
            tracing::info!("sensitivity exported to {}", path.display());
        }
    }

    if request.snapshot {
        let json = Snapshot::from_parts(*inputs, results).to_json_pretty()?;
        writeln!(out, "{}", json)?;
    }

    out.flush()?;
    Ok(())
}

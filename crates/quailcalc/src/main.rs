use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use quailcalc::headless::{self, HeadlessRequest};
use quailcalc::platform::default_clipboard;
use quailcalc::state::AppState;
use quailcalc::{App, DataDirectory, data::storage::load_inputs_file, init_logging};

#[derive(Parser, Debug)]
#[command(name = "quailcalc")]
#[command(about = "Quail farm profitability calculator: eggs versus chicks")]
struct Args {
    /// Path to the data directory (default: ~/.quailcalc/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// YAML file with starting inputs (overrides config.yaml)
    #[arg(short, long)]
    inputs: Option<PathBuf>,

    /// Write the sensitivity CSV to this path ("-" for stdout) and exit
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Print the snapshot JSON to stdout and exit
    #[arg(long)]
    snapshot: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let storage = DataDirectory::new(data_dir);
    let config = storage
        .load_config()
        .wrap_err_with(|| format!("loading config from {}", storage.root().display()))?;

    let inputs = match &args.inputs {
        Some(path) => load_inputs_file(path)?,
        None => config.default_inputs(),
    };

    let request = HeadlessRequest {
        snapshot: args.snapshot,
        export_csv: args.export_csv,
    };
    if !request.is_empty() {
        tracing::info!(?request, "running headless");
        return headless::run(&inputs, &request, std::io::stdout().lock());
    }

    let export_dir = storage.export_dir(&config);
    tracing::info!(export_dir = %export_dir.display(), "starting quailcalc");

    let state = AppState::new(&config, inputs, export_dir);
    let mut app = App::new(state, default_clipboard());

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

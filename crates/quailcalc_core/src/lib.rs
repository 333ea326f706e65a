//! Quail farm profitability model
//!
//! This crate computes egg-versus-chick profitability estimates from a fixed
//! set of business parameters. It provides:
//! - The deterministic calculation model ([`calculation::compute`])
//! - One-variable sensitivity sweeps for hatch rate, egg price and feed price
//! - Snapshot (JSON) and sensitivity (CSV) export formats
//!
//! Everything here is pure and synchronous; the same inputs always produce the
//! same outputs.
//!
//! ```ignore
//! use quailcalc_core::{FarmInputs, analyze, sensitivity_csv_string};
//!
//! let (results, sensitivity) = analyze(&FarmInputs::default());
//! println!("net chick profit per cycle: {:.0}", results.net_chick_cycle);
//! let csv = sensitivity_csv_string(&sensitivity)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod calculation;
pub mod error;
pub mod export;
pub mod sensitivity;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculation::{WEEKS_PER_MONTH, compute, round_half_up};
pub use error::ExportError;
pub use export::{
    CsvRow, SENSITIVITY_CSV_FILE_NAME, SNAPSHOT_FILE_NAME, Snapshot, read_sensitivity_csv,
    sensitivity_csv_string, write_sensitivity_csv,
};
pub use model::{BusinessLine, FarmInputs, FarmResults, FieldUnit, InputField};
pub use sensitivity::{
    SWEEP_POINTS, SensitivityPoint, SensitivityResult, SweepVariable, analyze, sweep,
};

//! Integration tests for the quailcalc model
//!
//! Tests are organized by topic:
//! - `calculation` - Derived figures, rounding and garbage-in behaviour
//! - `sensitivity` - Sweep domains, values and consistency with the model
//! - `export` - Snapshot JSON and sensitivity CSV

mod sensitivity;

use crate::model::FarmInputs;

/// Compare two floats with a relative tolerance suitable for currency sums.
pub(crate) fn assert_close(actual: f64, expected: f64, what: &str) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}

/// Stock scenario from the farm form.
pub(crate) fn stock_inputs() -> FarmInputs {
    FarmInputs::default()
}

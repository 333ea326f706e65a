//! Terminal front end for the quail farm profitability model
//!
//! This crate wraps [`quailcalc_core`] in a ratatui form:
//! - An input panel for the eleven farm parameters
//! - A results panel with rounded, currency-prefixed figures
//! - Three sensitivity line charts (hatch rate, egg price, feed price)
//! - Snapshot copy to the clipboard and sensitivity CSV export

pub mod actions;
pub mod app;
pub mod components;
pub mod data;
pub mod headless;
pub mod logging;
pub mod modals;
pub mod platform;
pub mod state;
pub mod util;

pub use app::App;
pub use data::storage::{DataConfig, DataDirectory, StorageError};
pub use logging::init_logging;

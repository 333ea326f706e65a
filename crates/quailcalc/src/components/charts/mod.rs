//! Chart components for data visualization.

mod sensitivity;

pub use sensitivity::{SensitivityCharts, chart_bounds, chart_data};

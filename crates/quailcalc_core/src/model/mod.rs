mod inputs;
mod results;

pub use inputs::{FarmInputs, FieldUnit, InputField};
pub use results::{BusinessLine, FarmResults};

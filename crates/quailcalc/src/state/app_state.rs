use std::path::PathBuf;

use quailcalc_core::{FarmInputs, FarmResults, InputField, SensitivityResult, Snapshot, analyze};

use crate::data::storage::DataConfig;

use super::ModalState;

/// Convert form text into a stored value.
///
/// Blank text counts as zero; anything that is not a number becomes NaN and
/// flows through the model unchanged.
pub fn coerce_input(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Text shown when a field is opened for editing.
pub fn edit_text(value: f64) -> String {
    value.to_string()
}

#[derive(Debug)]
pub struct AppState {
    pub inputs: FarmInputs,
    /// Inputs restored by reset
    pub defaults: FarmInputs,
    pub results: FarmResults,
    pub sensitivity: SensitivityResult,
    pub selected_field: usize,
    pub show_sensitivity: bool,
    pub currency: String,
    pub export_dir: PathBuf,
    pub modal: ModalState,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(config: &DataConfig, inputs: FarmInputs, export_dir: PathBuf) -> Self {
        let (results, sensitivity) = analyze(&inputs);
        Self {
            inputs,
            defaults: inputs,
            results,
            sensitivity,
            selected_field: 0,
            show_sensitivity: config.show_sensitivity,
            currency: config.currency.clone(),
            export_dir,
            modal: ModalState::None,
            status_message: None,
            error_message: None,
            exit: false,
        }
    }

    /// Rebuild results and sweeps from the current inputs.
    pub fn recompute(&mut self) {
        let (results, sensitivity) = analyze(&self.inputs);
        self.results = results;
        self.sensitivity = sensitivity;
        tracing::debug!(
            net_egg = self.results.net_egg_cycle,
            net_chick = self.results.net_chick_cycle,
            "recomputed"
        );
    }

    pub fn selected(&self) -> InputField {
        InputField::ALL[self.selected_field.min(InputField::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected_field = (self.selected_field + 1) % InputField::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected_field = self
            .selected_field
            .checked_sub(1)
            .unwrap_or(InputField::ALL.len() - 1);
    }

    pub fn value_of(&self, field: InputField) -> f64 {
        field.get(&self.inputs)
    }

    pub fn set_field(&mut self, field: InputField, value: f64) {
        field.set(&mut self.inputs, value);
        self.recompute();
    }

    /// Apply text typed into the edit modal to `field`.
    pub fn set_field_text(&mut self, field: InputField, text: &str) {
        self.set_field(field, coerce_input(text));
    }

    /// Add `delta` to the selected field.
    pub fn nudge(&mut self, delta: f64) {
        let field = self.selected();
        let value = self.value_of(field) + delta;
        self.set_field(field, value);
    }

    pub fn reset(&mut self) {
        self.inputs = self.defaults;
        self.recompute();
    }

    pub fn toggle_sensitivity(&mut self) {
        self.show_sensitivity = !self.show_sensitivity;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_parts(self.inputs, self.results)
    }

    pub fn set_status(&mut self, message: String) {
        self.error_message = None;
        self.status_message = Some(message);
    }

    pub fn set_error(&mut self, message: String) {
        self.status_message = None;
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

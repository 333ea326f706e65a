// Actions module - handlers for key commands and confirmed modals
//
// Handlers mutate `AppState` and report what the modal layer should show
// next; app.rs applies the result.

use quailcalc_core::InputField;

use crate::data::storage::DataDirectory;
use crate::platform::Clipboard;
use crate::state::{AppState, MessageModal, ModalAction, ModalState, TextInputModal, edit_text};

/// Result of an action handler
#[derive(Debug)]
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action failed with an error message
    Error(String),
}

impl ActionResult {
    /// Create a result that closes the modal
    pub fn close() -> Self {
        ActionResult::Done(None)
    }

    /// Create a result that shows a new modal
    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    /// Create an error result
    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }
}

/// Store the outcome of a handler on the state.
pub fn apply_result(state: &mut AppState, result: ActionResult) {
    match result {
        ActionResult::Done(modal) => state.modal = modal.unwrap_or_default(),
        ActionResult::Error(msg) => {
            tracing::warn!("{}", msg);
            state.modal = ModalState::None;
            state.set_error(msg);
        }
    }
}

/// Open the edit modal for the selected field.
pub fn edit_selected(state: &AppState) -> ActionResult {
    let field = state.selected();
    ActionResult::modal(ModalState::TextInput(TextInputModal::new(
        "Edit value",
        field.label(),
        &edit_text(state.value_of(field)),
        ModalAction::EditField(field),
    )))
}

pub fn handle_confirmed(state: &mut AppState, action: ModalAction, value: &str) -> ActionResult {
    match action {
        ModalAction::EditField(field) => edit_field(state, field, value),
    }
}

fn edit_field(state: &mut AppState, field: InputField, value: &str) -> ActionResult {
    state.set_field_text(field, value);
    tracing::debug!(field = field.label(), value, "field edited");
    ActionResult::close()
}

/// Copy the snapshot JSON, falling back to a file next to the exports.
pub fn copy_snapshot(state: &mut AppState, clipboard: &mut dyn Clipboard) -> ActionResult {
    let snapshot = state.snapshot();
    let json = match snapshot.to_json() {
        Ok(json) => json,
        Err(e) => return ActionResult::error(format!("Snapshot failed: {}", e)),
    };

    match clipboard.set_text(&json) {
        Ok(()) => {
            tracing::info!(bytes = json.len(), "snapshot copied to clipboard");
            state.set_status("Snapshot copied to clipboard".to_string());
            ActionResult::close()
        }
        Err(clip_err) => {
            tracing::warn!("{}", clip_err);
            match DataDirectory::write_snapshot(&state.export_dir, &snapshot) {
                Ok(path) => {
                    tracing::info!("snapshot written to {}", path.display());
                    state.set_status(format!("Snapshot saved to {}", path.display()));
                    ActionResult::modal(ModalState::Message(MessageModal::info(
                        "Snapshot saved",
                        &format!("{}. Saved to {} instead.", clip_err, path.display()),
                    )))
                }
                Err(e) => {
                    tracing::error!("snapshot fallback failed: {}", e);
                    ActionResult::modal(ModalState::Message(MessageModal::error(
                        "Copy failed",
                        &format!("{}. {}", clip_err, e),
                    )))
                }
            }
        }
    }
}

/// Write the sensitivity CSV to the export directory.
pub fn export_csv(state: &mut AppState) -> ActionResult {
    match DataDirectory::write_sensitivity_csv(&state.export_dir, &state.sensitivity) {
        Ok(path) => {
            tracing::info!("sensitivity exported to {}", path.display());
            state.set_status(format!("Exported {}", path.display()));
            ActionResult::close()
        }
        Err(e) => ActionResult::error(format!("Export failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use quailcalc_core::{
        FarmInputs, SENSITIVITY_CSV_FILE_NAME, SNAPSHOT_FILE_NAME, Snapshot, read_sensitivity_csv,
    };
    use tempfile::tempdir;

    use crate::data::storage::DataConfig;
    use crate::platform::{ClipboardError, NoClipboard};

    #[derive(Default)]
    struct RecordingClipboard {
        text: Option<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn state_in(dir: &std::path::Path) -> AppState {
        AppState::new(
            &DataConfig::default(),
            FarmInputs::default(),
            dir.to_path_buf(),
        )
    }

    #[test]
    fn test_edit_selected_prefills_value() {
        let dir = tempdir().unwrap();
        let mut state = state_in(dir.path());
        state.select_next();

        let result = edit_selected(&state);
        let ActionResult::Done(Some(ModalState::TextInput(modal))) = result else {
            panic!("expected text input modal");
        };
        assert_eq!(modal.value, "80");
        assert_eq!(modal.action, ModalAction::EditField(InputField::PctFemale));
    }

    #[test]
    fn test_confirmed_edit_updates_inputs() {
        let dir = tempdir().unwrap();
        let mut state = state_in(dir.path());
        let action = ModalAction::EditField(InputField::FeedPriceKg);

        let result = handle_confirmed(&mut state, action, "");
        apply_result(&mut state, result);

        assert_eq!(state.inputs.feed_price_kg, 0.0);
        assert!(!state.modal.is_active());
    }

    #[test]
    fn test_copy_snapshot_to_clipboard() {
        let dir = tempdir().unwrap();
        let mut state = state_in(dir.path());
        let mut clipboard = RecordingClipboard::default();

        let result = copy_snapshot(&mut state, &mut clipboard);
        apply_result(&mut state, result);

        let copied = Snapshot::from_json(clipboard.text.as_deref().unwrap()).unwrap();
        assert_eq!(copied.inputs, state.inputs);
        assert!(!dir.path().join(SNAPSHOT_FILE_NAME).exists());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Snapshot copied to clipboard")
        );
    }

    #[test]
    fn test_copy_snapshot_falls_back_to_file() {
        let dir = tempdir().unwrap();
        let mut state = state_in(dir.path());

        let result = copy_snapshot(&mut state, &mut NoClipboard);
        apply_result(&mut state, result);

        let saved = fs::read_to_string(dir.path().join(SNAPSHOT_FILE_NAME)).unwrap();
        assert_eq!(Snapshot::from_json(&saved).unwrap().inputs, state.inputs);
        assert!(matches!(state.modal, ModalState::Message(ref m) if !m.is_error));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_export_csv() {
        let dir = tempdir().unwrap();
        let mut state = state_in(dir.path());

        let result = export_csv(&mut state);
        apply_result(&mut state, result);

        let file = fs::File::open(dir.path().join(SENSITIVITY_CSV_FILE_NAME)).unwrap();
        let rows = read_sensitivity_csv(file).unwrap();
        assert_eq!(rows.len(), 27);
        assert!(state.status_message.unwrap().starts_with("Exported"));
    }

    #[test]
    fn test_export_error_reaches_status_bar() {
        let dir = tempdir().unwrap();
        // a file where the export directory should be
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "").unwrap();
        let mut state = state_in(&blocker);

        let result = export_csv(&mut state);
        apply_result(&mut state, result);

        assert!(state.error_message.unwrap().starts_with("Export failed"));
    }
}

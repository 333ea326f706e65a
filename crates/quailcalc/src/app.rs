use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::actions::{self, apply_result};
use crate::components::{
    Component, EventResult, charts::SensitivityCharts, input_panel::InputPanel,
    results_panel::ResultsPanel, status_bar::StatusBar,
};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::platform::Clipboard;
use crate::state::{AppState, ModalAction, ModalState};

pub struct App {
    state: AppState,
    clipboard: Box<dyn Clipboard>,
    input_panel: InputPanel,
    results_panel: ResultsPanel,
    charts: SensitivityCharts,
    status_bar: StatusBar,
}

impl App {
    pub fn new(state: AppState, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            state,
            clipboard,
            input_panel: InputPanel::new(),
            results_panel: ResultsPanel::new(),
            charts: SensitivityCharts::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        let columns = if self.state.show_sensitivity {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[0])
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(100)])
                .split(chunks[0])
        };

        // Form above results
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(13), Constraint::Min(0)])
            .split(columns[0]);

        self.input_panel.render(frame, left[0], &self.state);
        self.results_panel.render(frame, left[1], &self.state);

        if self.state.show_sensitivity {
            self.charts.render(frame, columns[1], &self.state);
        }

        self.status_bar.render(frame, chunks[1], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if self.state.modal.is_active() {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action, value) => {
                    self.handle_modal_result(action, value);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') => {
                let result = actions::copy_snapshot(&mut self.state, self.clipboard.as_mut());
                apply_result(&mut self.state, result);
                return;
            }
            KeyCode::Char('x') => {
                let result = actions::export_csv(&mut self.state);
                apply_result(&mut self.state, result);
                return;
            }
            KeyCode::Char('v') => {
                self.state.toggle_sensitivity();
                return;
            }
            KeyCode::Char('r') => {
                self.state.reset();
                self.state.set_status("Inputs reset".to_string());
                tracing::info!("inputs reset to defaults");
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                self.state.status_message = None;
                return;
            }
            _ => {}
        }

        if self.input_panel.handle_key(key_event, &mut self.state) == EventResult::Exit {
            self.state.exit = true;
        }
    }

    fn handle_modal_result(&mut self, action: ModalAction, value: String) {
        let result = actions::handle_confirmed(&mut self.state, action, &value);
        apply_result(&mut self.state, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use quailcalc_core::{FarmInputs, SENSITIVITY_CSV_FILE_NAME, SNAPSHOT_FILE_NAME};
    use tempfile::tempdir;

    use crate::data::storage::DataConfig;
    use crate::platform::NoClipboard;

    fn app_in(dir: &Path) -> App {
        let state = AppState::new(
            &DataConfig::default(),
            FarmInputs::default(),
            dir.to_path_buf(),
        );
        App::new(state, Box::new(NoClipboard))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_edit_flow() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        // move to egg price and replace 100 with 150
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Enter);
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        // 'q' and 'x' go to the editor while it is open
        type_text(&mut app, "150");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().inputs.egg_price, 150.0);
        assert!(!app.state().modal.is_active());
        assert!(!app.state().exit);
    }

    #[test]
    fn test_cancel_edit_keeps_value() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "999");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.state().inputs.birds, 100.0);
        assert!(!app.state().modal.is_active());
    }

    #[test]
    fn test_export_and_copy_keys() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        press(&mut app, KeyCode::Char('x'));
        assert!(dir.path().join(SENSITIVITY_CSV_FILE_NAME).exists());

        press(&mut app, KeyCode::Char('c'));
        assert!(dir.path().join(SNAPSHOT_FILE_NAME).exists());
        // fallback notice is shown, and dismissed with Enter
        assert!(app.state().modal.is_active());
        press(&mut app, KeyCode::Enter);
        assert!(!app.state().modal.is_active());
    }

    #[test]
    fn test_toggle_reset_and_quit() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());

        press(&mut app, KeyCode::Char('v'));
        assert!(!app.state().show_sensitivity);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.state().inputs.birds, 101.0);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().inputs, FarmInputs::default());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.state().exit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let dir = tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.state().exit);
        assert!(!dir.path().join(SNAPSHOT_FILE_NAME).exists());
    }
}

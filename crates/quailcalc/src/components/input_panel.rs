use crossterm::event::{KeyCode, KeyEvent};
use quailcalc_core::InputField;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::actions::{apply_result, edit_selected};
use crate::state::AppState;
use crate::util::format::format_input;
use crate::util::styles::focused_block_with_help;

/// The form: one row per input, edited through the text input modal.
pub struct InputPanel;

impl InputPanel {
    pub fn new() -> Self {
        Self
    }

    fn row(state: &AppState, index: usize, field: InputField, width: usize) -> Line<'static> {
        let selected = index == state.selected_field;
        let value = format_input(state.value_of(field), field.unit(), &state.currency);
        let label = field.label();
        let pad = width.saturating_sub(label.chars().count() + value.chars().count() + 2);

        let marker = if selected { "> " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value_style = if state.value_of(field).is_nan() {
            Style::default().fg(Color::Red)
        } else {
            style
        };

        Line::from(vec![
            Span::styled(marker, style),
            Span::styled(label, style),
            Span::raw(" ".repeat(pad)),
            Span::styled(value, value_style),
        ])
    }
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => state.select_prev(),
            KeyCode::Enter | KeyCode::Char('e') => {
                let result = edit_selected(state);
                apply_result(state, result);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => state.nudge(1.0),
            KeyCode::Char('-') => state.nudge(-1.0),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block_with_help(
            " Farm inputs ",
            !state.modal.is_active(),
            "j/k: move  Enter: edit  +/-: nudge",
        );
        let width = block.inner(area).width as usize;

        let lines: Vec<Line> = InputField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| Self::row(state, i, *field, width))
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

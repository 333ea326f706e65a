use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::TextInputModal;

use super::ModalResult;
use super::helpers::{HelpText, calculate_scroll, render_cursor_line, render_modal_frame};

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 10;

pub fn render_text_input_modal(frame: &mut Frame, modal: &TextInputModal) {
    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        MODAL_HEIGHT,
        Color::Cyan,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Help text
        ],
    );

    let prompt = Paragraph::new(Line::from(Span::styled(
        modal.prompt.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(prompt, mf.chunks[1]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let input_inner = input_block.inner(mf.chunks[2]);
    frame.render_widget(input_block, mf.chunks[2]);

    let scrolled = calculate_scroll(&modal.value, modal.cursor_pos, input_inner.width as usize);
    let input_line = render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, " ");
    frame.render_widget(Paragraph::new(input_line), input_inner);

    let hint = Paragraph::new("Blank = 0, non-numbers show as NaN")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, mf.chunks[3]);

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "Apply")
        .key("[Ctrl+U]", Color::Magenta, "Clear")
        .key("[Esc]", Color::Yellow, "Cancel")
        .build();
    frame.render_widget(help, mf.chunks[4]);
}

pub fn handle_text_input_key(key: KeyEvent, modal: &mut TextInputModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Confirmed(modal.action, modal.value.clone()),
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            modal.clear();
            ModalResult::Continue
        }
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Delete => {
            modal.delete();
            ModalResult::Continue
        }
        KeyCode::Left => {
            modal.move_cursor_left();
            ModalResult::Continue
        }
        KeyCode::Right => {
            modal.move_cursor_right();
            ModalResult::Continue
        }
        KeyCode::Home => {
            modal.move_cursor_home();
            ModalResult::Continue
        }
        KeyCode::End => {
            modal.move_cursor_end();
            ModalResult::Continue
        }
        KeyCode::Char(c) => {
            modal.insert_char(c);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalAction;
    use quailcalc_core::InputField;

    #[test]
    fn test_ctrl_u_clears() {
        let mut modal = TextInputModal::new(
            "Edit",
            "Birds",
            "100",
            ModalAction::EditField(InputField::Birds),
        );
        let result = handle_text_input_key(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            &mut modal,
        );
        assert_eq!(result, ModalResult::Continue);
        assert_eq!(modal.value, "");

        let result = handle_text_input_key(KeyEvent::from(KeyCode::Enter), &mut modal);
        assert_eq!(
            result,
            ModalResult::Confirmed(ModalAction::EditField(InputField::Birds), String::new())
        );
    }
}

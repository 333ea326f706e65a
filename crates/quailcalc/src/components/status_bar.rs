use super::{Component, EventResult};
use crate::state::AppState;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        if state.show_sensitivity {
            "c: copy snapshot | x: export CSV | v: hide charts | r: reset | q: quit"
        } else {
            "c: copy snapshot | x: export CSV | v: show charts | r: reset | q: quit"
        }
    }

    fn content(state: &AppState) -> Line<'static> {
        if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.clone()),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(vec![
                Span::styled(status.clone(), Style::default().fg(Color::Green)),
                Span::styled(
                    format!("  ({})", Self::help_text(state)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let paragraph =
            Paragraph::new(Self::content(state)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}

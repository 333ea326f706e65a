//! Common styling utilities for TUI components

use quailcalc_core::SweepVariable;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for positive values
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for negative values
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text that shows focused state.
///
/// The help text is only shown when the panel is focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Green for profit, red for loss. NaN counts as a loss.
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Get the appropriate style for a monetary value.
pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}

/// Line color for each sensitivity chart (teal, amber, red).
pub fn sweep_color(variable: SweepVariable) -> Color {
    match variable {
        SweepVariable::HatchRate => Color::Rgb(0x0e, 0xa5, 0xa4),
        SweepVariable::EggPrice => Color::Rgb(0xf5, 0x9e, 0x0b),
        SweepVariable::FeedPrice => Color::Rgb(0xef, 0x44, 0x44),
    }
}

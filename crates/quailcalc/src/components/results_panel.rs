use crossterm::event::KeyEvent;
use quailcalc_core::FarmResults;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::{format_count, format_money};
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, value_style};

/// How a result row is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Count,
    Money,
    /// Money colored by sign
    Net,
}

const ROWS: [(&str, RowKind, fn(&FarmResults) -> f64); 8] = [
    ("Eggs / week", RowKind::Count, |r| r.eggs_week),
    ("Egg revenue / month", RowKind::Money, |r| r.egg_rev_month),
    ("Estimated chicks / cycle", RowKind::Count, |r| r.chicks_cycle),
    ("Chick revenue / cycle", RowKind::Money, |r| r.chick_rev_cycle),
    ("Feed cost / cycle", RowKind::Money, |r| r.feed_cost_cycle),
    ("Other cost / cycle", RowKind::Money, |r| r.other_cost_cycle),
    ("Net profit (eggs) / cycle", RowKind::Net, |r| r.net_egg_cycle),
    ("Net profit (chicks) / cycle", RowKind::Net, |r| r.net_chick_cycle),
];

/// Read-only view of the derived figures, rounded for display.
pub struct ResultsPanel;

impl ResultsPanel {
    pub fn new() -> Self {
        Self
    }

    fn lines(state: &AppState, width: usize) -> Vec<Line<'static>> {
        let results = &state.results;
        let mut lines = Vec::with_capacity(ROWS.len() + 3);

        for (label, kind, get) in ROWS {
            let value = get(results);
            let (text, style) = match kind {
                RowKind::Count => (format_count(value), Style::default()),
                RowKind::Money => (format_money(&state.currency, value), Style::default()),
                RowKind::Net => (
                    format_money(&state.currency, value),
                    value_style(value).add_modifier(Modifier::BOLD),
                ),
            };

            if kind == RowKind::Net && label.contains("eggs") {
                lines.push(Line::from(""));
            }

            let pad = width.saturating_sub(label.chars().count() + text.chars().count() + 1);
            lines.push(Line::from(vec![
                Span::raw(format!(" {}", label)).fg(HELP_COLOR),
                Span::raw(" ".repeat(pad)),
                Span::styled(text, style),
            ]));
        }

        let better = results.better_option();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw(" Better per cycle: ").fg(HELP_COLOR),
            Span::styled(
                better.name(),
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        lines
    }
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ResultsPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ");
        let width = block.inner(area).width as usize;
        let paragraph = Paragraph::new(Self::lines(state, width)).block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use quailcalc_core::FarmInputs;

    use crate::data::storage::DataConfig;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_stock_results_lines() {
        let state = AppState::new(&DataConfig::default(), FarmInputs::default(), PathBuf::from("."));
        let lines = ResultsPanel::lines(&state, 48);
        let rendered: Vec<String> = lines.iter().map(text).collect();

        assert!(rendered[0].ends_with("400"));
        assert!(rendered[1].ends_with("MK 173,200"));
        assert!(rendered[2].ends_with("2,176"));
        assert!(rendered[3].ends_with("MK 3,264,000"));
        assert!(rendered[4].ends_with("MK 67,200"));
        assert!(rendered[5].ends_with("MK 55,427"));
        assert!(rendered[7].ends_with("MK 197,373"));
        assert!(rendered[8].ends_with("MK 3,141,373"));
        assert!(rendered.last().unwrap().ends_with("chicks"));
    }

    #[test]
    fn test_rows_fill_width() {
        let state = AppState::new(&DataConfig::default(), FarmInputs::default(), PathBuf::from("."));
        let lines = ResultsPanel::lines(&state, 48);
        assert_eq!(text(&lines[0]).chars().count(), 48);
    }
}

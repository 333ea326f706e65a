//! Line charts of net profit across the three sweep domains.

use crossterm::event::KeyEvent;
use quailcalc_core::{SensitivityPoint, SensitivityResult, SweepVariable};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_compact;
use crate::util::styles::{HELP_COLOR, sweep_color};

/// Chart points `(swept value, net profit)`. NaN profits are left out.
pub fn chart_data(variable: SweepVariable, points: &[SensitivityPoint]) -> Vec<(f64, f64)> {
    variable
        .domain()
        .into_iter()
        .zip(points)
        .filter(|(_, p)| p.value.is_finite())
        .map(|(x, p)| (f64::from(x), p.value))
        .collect()
}

/// Y-axis bounds with 10% padding; a flat series still gets a visible band.
pub fn chart_bounds(data: &[(f64, f64)]) -> Option<(f64, f64)> {
    if data.is_empty() {
        return None;
    }
    let min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let padding = (max - min).abs().max(1.0) * 0.1;
    Some((min - padding, max + padding))
}

/// The three sensitivity charts, stacked.
pub struct SensitivityCharts;

impl SensitivityCharts {
    pub fn new() -> Self {
        Self
    }

    fn render_chart(
        frame: &mut Frame,
        area: Rect,
        variable: SweepVariable,
        sensitivity: &SensitivityResult,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", variable.title()));

        let points = sensitivity.series(variable);
        let data = chart_data(variable, points);
        let Some((y_min, y_max)) = chart_bounds(&data) else {
            let paragraph = Paragraph::new(vec![Line::from("  No data to display.")]).block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let domain = variable.domain();
        let x_min = f64::from(domain[0]);
        let x_max = f64::from(domain[domain.len() - 1]);
        let x_padding = (x_max - x_min).abs() * 0.02;

        let x_labels: Vec<Span> = [0, domain.len() / 2, domain.len() - 1]
            .iter()
            .map(|&i| Span::raw(variable.label(domain[i])))
            .collect();
        let y_labels = vec![
            Span::raw(format_compact(y_min)),
            Span::raw(format_compact((y_min + y_max) / 2.0)),
            Span::raw(format_compact(y_max)),
        ];

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(sweep_color(variable)))
            .data(&data);

        let x_axis = Axis::default()
            .title(variable.axis_label().fg(HELP_COLOR))
            .bounds([x_min - x_padding, x_max + x_padding])
            .labels(x_labels);

        let y_axis = Axis::default().bounds([y_min, y_max]).labels(y_labels);

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

impl Default for SensitivityCharts {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SensitivityCharts {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (variable, chunk) in SweepVariable::ALL.into_iter().zip(chunks.iter()) {
            Self::render_chart(frame, *chunk, variable, &state.sensitivity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quailcalc_core::{FarmInputs, analyze};

    #[test]
    fn test_chart_data_uses_domain_values() {
        let (_, sensitivity) = analyze(&FarmInputs::default());
        let data = chart_data(SweepVariable::HatchRate, &sensitivity.by_hatch);
        assert_eq!(data.len(), 9);
        assert_eq!(data[0], (50.0, 1_917_373.0));
        assert_eq!(data[8], (90.0, 3_549_373.0));

        let feed = chart_data(SweepVariable::FeedPrice, &sensitivity.by_feed_price);
        assert_eq!(feed[0].0, 400.0);
        assert_eq!(feed[8].0, 1040.0);
    }

    #[test]
    fn test_chart_data_skips_nan() {
        let mut inputs = FarmInputs::default();
        inputs.birds = f64::NAN;
        let (_, sensitivity) = analyze(&inputs);
        assert!(chart_data(SweepVariable::EggPrice, &sensitivity.by_egg_price).is_empty());
        assert_eq!(chart_bounds(&[]), None);
    }

    #[test]
    fn test_chart_bounds_padding() {
        let (lo, hi) = chart_bounds(&[(1.0, 0.0), (2.0, 100.0)]).unwrap();
        assert_eq!((lo, hi), (-10.0, 110.0));

        // flat series
        let (lo, hi) = chart_bounds(&[(1.0, 5.0), (2.0, 5.0)]).unwrap();
        assert!(lo < 5.0 && hi > 5.0);
    }
}

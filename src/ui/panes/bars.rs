//! Bar chart rendering of a single snapshot
//!
//! Heights follow a fixed scale on a logical 800x600 surface: each value
//! unit is [`HEIGHT_SCALE`] surface units, so a value of [`CHART_CEILING`]
//! fills the chart. The chart is then fitted to the rows available.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

pub const SURFACE_HEIGHT: u64 = 600;
pub const HEIGHT_SCALE: u64 = 10;

/// Largest value that still fits on the surface
pub const CHART_CEILING: u64 = SURFACE_HEIGHT / HEIGHT_SCALE;

/// Bar width and gap in terminal columns
pub const BAR_WIDTH: u16 = 4;
pub const BAR_GAP: u16 = 1;

/// Render `values` as bars, drawing the indices in `active` highlighted
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[u64],
    active: Option<(usize, usize)>,
) {
    let is_active = |i: usize| active.is_some_and(|(a, b)| i == a || i == b);

    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let color = if is_active(i) {
                DEFAULT_THEME.bar_active
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value(value)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(DEFAULT_THEME.bar_value).bg(color))
        })
        .collect();

    let block = Block::default()
        .title(" Bubble Sort ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
        .max(CHART_CEILING)
        .style(Style::default().bg(DEFAULT_THEME.chart_bg));

    frame.render_widget(chart, area);
}

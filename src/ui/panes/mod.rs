//! TUI pane rendering
//!
//! - [`bars`]: one snapshot drawn as a bar chart, with optional highlighting
//! - [`status`]: status bar with step counter and keybindings
//!
//! Each module exports a `render_*` function taking the frame and the area to
//! draw into. [`split_screen`] gives the shared layout.

pub mod bars;
pub mod status;

pub use bars::render_bars_pane;
pub use status::render_status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into the chart area and a one-line status bar
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

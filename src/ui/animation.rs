//! Live replay of a finished recording
//!
//! Draws every "before comparison" snapshot with the compared pair
//! highlighted, pausing `delay` between frames. The run cannot be
//! interrupted; key presses made meanwhile are handled by the event loop
//! afterwards.

use crate::snapshot::{Phase, SnapshotHistory};
use crate::ui::panes::{render_bars_pane, render_status_bar, split_screen};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::thread;
use std::time::Duration;
use tracing::info;

/// Animate `history` and return the number of frames drawn
pub fn animate<B: Backend>(
    terminal: &mut Terminal<B>,
    history: &SnapshotHistory<u64>,
    delay: Duration,
) -> io::Result<usize> {
    let total = history.len();
    let mut frames = 0;

    for (index, snapshot) in history.iter().enumerate() {
        if snapshot.phase != Phase::BeforeCompare {
            continue;
        }

        let (a, b) = snapshot.active;
        let message = format!("Comparing positions {} and {}", a, b);
        terminal.draw(|frame| {
            let (chart_area, status_area) = split_screen(frame.area());
            render_bars_pane(frame, chart_area, &snapshot.values, Some(snapshot.active));
            render_status_bar(frame, status_area, &message, index, total, true);
        })?;
        frames += 1;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    info!(frames, "live animation finished");
    Ok(frames)
}

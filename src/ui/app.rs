//! Interactive playback application and event loop

use crate::playback::PlaybackController;
use crate::snapshot::Phase;
use crate::sorting::SortStats;
use crate::ui::panes::{render_bars_pane, render_status_bar, split_screen};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// The main application state
pub struct App {
    /// Recorded history and current step
    pub playback: PlaybackController<u64>,

    /// Counters from the recording run
    pub stats: SortStats,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Set when the screen no longer matches the state
    pub needs_redraw: bool,

    /// Sleep between loop iterations
    frame_interval: Duration,
}

impl App {
    pub fn new(
        playback: PlaybackController<u64>,
        stats: SortStats,
        frame_interval: Duration,
    ) -> Self {
        App {
            playback,
            stats,
            should_quit: false,
            status_message: format!(
                "{} comparisons, {} swaps",
                stats.comparisons, stats.swaps
            ),
            needs_redraw: true,
            frame_interval,
        }
    }

    /// Run the event loop until a quit key is pressed
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(total_steps = self.playback.total_steps(), "playback started");

        while !self.should_quit {
            if self.needs_redraw {
                terminal.draw(|f| self.render(f))?;
                self.needs_redraw = false;
            }

            // Drain everything that is pending, then sleep
            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Resize(..) => self.needs_redraw = true,
                    _ => {}
                }
            }

            if !self.should_quit {
                thread::sleep(self.frame_interval);
            }
        }

        info!(position = self.playback.position(), "playback stopped");
        Ok(())
    }

    /// Render the current step without highlighting
    pub fn render(&self, frame: &mut Frame) {
        let (chart_area, status_area) = split_screen(frame.area());

        if let Some(snapshot) = self.playback.current() {
            render_bars_pane(frame, chart_area, &snapshot.values, None);
        }

        render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.playback.position(),
            self.playback.total_steps(),
            false,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            // Raw mode swallows SIGINT, treat it as closing the window
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.step_forward(),
            KeyCode::Char('b') => self.step_backward(),
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        if self.playback.step_forward() {
            self.status_message = self.describe_current();
            self.needs_redraw = true;
        }
    }

    fn step_backward(&mut self) {
        if self.playback.step_backward() {
            self.status_message = self.describe_current();
            self.needs_redraw = true;
        }
    }

    fn describe_current(&self) -> String {
        match self.playback.current() {
            Some(snapshot) => {
                let (a, b) = snapshot.active;
                let message = match (snapshot.phase, snapshot.swapped) {
                    (Phase::BeforeCompare, _) => format!("Compare {} and {}", a, b),
                    (Phase::AfterCompare, true) => format!("Swapped {} and {}", a, b),
                    (Phase::AfterCompare, false) => format!("Kept {} and {}", a, b),
                };
                debug!(position = self.playback.position(), %message, "step");
                message
            }
            None => String::new(),
        }
    }
}

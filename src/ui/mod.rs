//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]** — playback state, keyboard event loop
//! - **[`animation`]** — timed replay of the recording with compared bars highlighted
//! - **[`panes`]** — stateless render functions (bar chart, status bar)
//! - **[`theme`]** — color palette shared by all panes
//!
//! Construct an [`App`] from a [`PlaybackController`] and call [`App::run`].
//!
//! [`PlaybackController`]: crate::playback::PlaybackController
//! [`App::run`]: app::App::run

pub mod animation;
pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

//! # Introduction
//!
//! bubbleviz runs bubble sort over a fixed array, capturing a snapshot of
//! the whole array before and after every comparison. The snapshot history
//! is then replayed in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), either as a timed animation or step
//! by step under keyboard control.
//!
//! ## Pipeline
//!
//! ```text
//! Dataset → Recorder → SnapshotHistory → (Animation) → PlaybackController → TUI
//! ```
//!
//! 1. [`sorting`] — bubble sort with state capture; no display side effects.
//! 2. [`snapshot`] — snapshots and the capacity-checked history.
//! 3. [`playback`] — bounded forward/backward navigation.
//! 4. [`ui`] — bar chart rendering, live animation, event loop.
//! 5. [`config`] and [`errors`] — command line and startup failures.

pub mod config;
pub mod errors;
pub mod playback;
pub mod snapshot;
pub mod sorting;
pub mod ui;

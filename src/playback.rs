//! Step-through navigation over a recorded history

use crate::snapshot::{Snapshot, SnapshotHistory};
use tracing::trace;

/// Owns the recorded history and the current position in it.
///
/// The position always stays within `0..total_steps()`. Requests past
/// either end are ignored.
#[derive(Debug)]
pub struct PlaybackController<T> {
    history: SnapshotHistory<T>,
    position: usize,
}

impl<T> PlaybackController<T> {
    pub fn new(history: SnapshotHistory<T>) -> Self {
        PlaybackController {
            history,
            position: 0,
        }
    }

    /// Move to the next step. Returns `false` when already at the last one.
    pub fn step_forward(&mut self) -> bool {
        if self.position + 1 < self.history.len() {
            self.position += 1;
            trace!(position = self.position, "stepped forward");
            true
        } else {
            false
        }
    }

    /// Move to the previous step. Returns `false` when already at step 0.
    pub fn step_backward(&mut self) -> bool {
        if self.position > 0 {
            self.position -= 1;
            trace!(position = self.position, "stepped backward");
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_steps(&self) -> usize {
        self.history.len()
    }

    /// Snapshot at the current position, `None` for an empty history
    pub fn current(&self) -> Option<&Snapshot<T>> {
        self.history.get(self.position)
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.history.len()
    }
}

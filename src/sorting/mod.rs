//! Sorting with full state capture
//!
//! - [`recorder`]: bubble sort that records a [`Snapshot`](crate::snapshot::Snapshot)
//!   before and after every comparison
//! - [`constants`]: the fixed dataset and the legacy history size
//!
//! Recording has no display side effects. The resulting
//! [`SnapshotHistory`](crate::snapshot::SnapshotHistory) is handed to the UI,
//! which animates it or replays it interactively.

pub mod constants;
pub mod recorder;

pub use recorder::{record_bubble_sort, snapshot_count, Recording, SortStats};

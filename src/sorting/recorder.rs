//! Bubble sort with snapshot recording
//!
//! For every inner-loop iteration the recorder stores two snapshots: the
//! array before comparing `a[j]` and `a[j + 1]`, and the array after the
//! conditional swap. An input of length `n` therefore yields `n * (n - 1)`
//! snapshots.

use crate::snapshot::{HistoryError, Phase, Snapshot, SnapshotHistory};
use tracing::debug;

/// Counters collected while recording
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: usize,
    pub swaps: usize,
}

/// Result of a recording run
#[derive(Debug, Clone)]
pub struct Recording<T> {
    pub history: SnapshotHistory<T>,
    pub stats: SortStats,
}

/// Number of snapshots bubble sort records for `len` elements
pub fn snapshot_count(len: usize) -> usize {
    len * len.saturating_sub(1)
}

/// Sort a copy of `input` and capture every comparison into `history`.
///
/// Fails with [`HistoryError::CapacityExceeded`] before sorting anything
/// when `history` cannot hold all snapshots.
pub fn record_bubble_sort<T: PartialOrd + Clone>(
    input: &[T],
    mut history: SnapshotHistory<T>,
) -> Result<Recording<T>, HistoryError> {
    let n = input.len();
    history.reserve(snapshot_count(n))?;

    let mut values = input.to_vec();
    let mut stats = SortStats::default();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            history.push(Snapshot {
                values: values.clone(),
                active: (j, j + 1),
                phase: Phase::BeforeCompare,
                swapped: false,
            })?;

            stats.comparisons += 1;
            let swapped = values[j] > values[j + 1];
            if swapped {
                values.swap(j, j + 1);
                stats.swaps += 1;
            }

            history.push(Snapshot {
                values: values.clone(),
                active: (j, j + 1),
                phase: Phase::AfterCompare,
                swapped,
            })?;
        }
        debug!(pass = i, swaps = stats.swaps, "bubble sort pass recorded");
    }

    Ok(Recording { history, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_count_small_inputs() {
        assert_eq!(snapshot_count(0), 0);
        assert_eq!(snapshot_count(1), 0);
        assert_eq!(snapshot_count(2), 2);
        assert_eq!(snapshot_count(15), 210);
    }

    #[test]
    fn test_phases_alternate() {
        let recording = record_bubble_sort(&[3, 1, 2], SnapshotHistory::unbounded()).unwrap();
        let phases: Vec<Phase> = recording.history.iter().map(|s| s.phase).collect();
        assert_eq!(
            phases,
            vec![
                Phase::BeforeCompare,
                Phase::AfterCompare,
                Phase::BeforeCompare,
                Phase::AfterCompare,
                Phase::BeforeCompare,
                Phase::AfterCompare,
            ]
        );
    }

    #[test]
    fn test_swap_is_visible_in_after_snapshot() {
        let recording = record_bubble_sort(&[2, 1], SnapshotHistory::unbounded()).unwrap();
        let before = recording.history.get(0).unwrap();
        let after = recording.history.get(1).unwrap();
        assert_eq!(before.values, vec![2, 1]);
        assert!(!before.swapped);
        assert_eq!(after.values, vec![1, 2]);
        assert!(after.swapped);
        assert_eq!(after.active, (0, 1));
        assert_eq!(recording.stats, SortStats { comparisons: 1, swaps: 1 });
    }

    #[test]
    fn test_equal_elements_are_not_swapped() {
        let recording = record_bubble_sort(&[3, 3], SnapshotHistory::unbounded()).unwrap();
        assert_eq!(recording.stats.swaps, 0);
    }
}

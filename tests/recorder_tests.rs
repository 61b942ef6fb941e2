// Integration tests for the snapshot recorder

use bubbleviz::snapshot::{HistoryError, Phase, SnapshotHistory};
use bubbleviz::sorting::constants::{DATASET, LEGACY_HISTORY_CAPACITY};
use bubbleviz::sorting::{record_bubble_sort, snapshot_count};
use proptest::prelude::*;

const SORTED_DATASET: [u64; 15] = [0, 1, 3, 3, 4, 5, 10, 12, 17, 19, 20, 22, 24, 38, 40];

#[test]
fn test_dataset_produces_210_snapshots() {
    let recording =
        record_bubble_sort(&DATASET, SnapshotHistory::unbounded()).expect("Recording failed");

    assert_eq!(recording.history.len(), 210);
    assert_eq!(recording.stats.comparisons, 105);
}

#[test]
fn test_dataset_first_and_last_snapshots() {
    let recording =
        record_bubble_sort(&DATASET, SnapshotHistory::unbounded()).expect("Recording failed");

    let first = recording.history.first().expect("No first snapshot");
    let last = recording.history.last().expect("No last snapshot");

    assert_eq!(first.values, DATASET.to_vec());
    assert_eq!(first.phase, Phase::BeforeCompare);
    assert_eq!(first.active, (0, 1));
    assert_eq!(last.values, SORTED_DATASET.to_vec());
    assert_eq!(last.phase, Phase::AfterCompare);
}

#[test]
fn test_legacy_capacity_fails_loudly() {
    let result = record_bubble_sort(
        &DATASET,
        SnapshotHistory::with_limit(LEGACY_HISTORY_CAPACITY),
    );

    match result {
        Err(e) => {
            assert_eq!(
                e,
                HistoryError::CapacityExceeded {
                    required: 210,
                    capacity: 100
                }
            );
            assert!(e.to_string().contains("210"));
        }
        Ok(recording) => panic!(
            "Expected capacity error, got {} snapshots",
            recording.history.len()
        ),
    }
}

#[test]
fn test_exact_capacity_is_enough() {
    let recording = record_bubble_sort(&DATASET, SnapshotHistory::with_limit(210))
        .expect("Recording failed");
    assert_eq!(recording.history.len(), 210);
    assert_eq!(recording.history.limit(), Some(210));
}

#[test]
fn test_history_push_respects_limit() {
    let mut history = SnapshotHistory::with_limit(0);
    let err = history
        .push(bubbleviz::snapshot::Snapshot {
            values: vec![1u64],
            active: (0, 0),
            phase: Phase::BeforeCompare,
            swapped: false,
        })
        .unwrap_err();
    assert_eq!(
        err,
        HistoryError::CapacityExceeded {
            required: 1,
            capacity: 0
        }
    );
    assert!(history.is_empty());
}

#[test]
fn test_trivial_inputs_record_nothing() {
    let empty: [u64; 0] = [];
    let recording = record_bubble_sort(&empty, SnapshotHistory::unbounded()).unwrap();
    assert!(recording.history.is_empty());

    let recording = record_bubble_sort(&[7u64], SnapshotHistory::unbounded()).unwrap();
    assert!(recording.history.is_empty());
}

#[test]
fn test_snapshots_show_one_step_at_a_time() {
    let recording =
        record_bubble_sort(&DATASET, SnapshotHistory::unbounded()).expect("Recording failed");

    // Consecutive snapshots differ by at most one adjacent swap
    for pair in recording.history.iter().collect::<Vec<_>>().windows(2) {
        let changed: Vec<usize> = (0..DATASET.len())
            .filter(|&i| pair[0].values[i] != pair[1].values[i])
            .collect();
        assert!(changed.is_empty() || (changed.len() == 2 && changed[1] == changed[0] + 1));
    }
}

proptest! {
    #[test]
    fn prop_snapshot_count_is_n_times_n_minus_one(
        values in proptest::collection::vec(0u64..100, 0..24)
    ) {
        let recording = record_bubble_sort(&values, SnapshotHistory::unbounded()).unwrap();
        prop_assert_eq!(recording.history.len(), values.len() * values.len().saturating_sub(1));
        prop_assert_eq!(recording.history.len(), snapshot_count(values.len()));
    }

    #[test]
    fn prop_first_is_input_and_last_is_sorted(
        values in proptest::collection::vec(-50i32..50, 2..24)
    ) {
        let recording = record_bubble_sort(&values, SnapshotHistory::unbounded()).unwrap();
        let mut sorted = values.clone();
        sorted.sort();

        prop_assert_eq!(&recording.history.first().unwrap().values, &values);
        prop_assert_eq!(&recording.history.last().unwrap().values, &sorted);
    }
}

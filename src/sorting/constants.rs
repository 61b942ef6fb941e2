// Constants for the bubble sort visualizer

/// The array that gets sorted and visualized
pub const DATASET: [u64; 15] = [0, 1, 10, 3, 20, 40, 22, 3, 4, 5, 24, 17, 38, 12, 19];

/// History size of the original fixed buffer.
/// Too small for [`DATASET`], which needs 210 snapshots.
pub const LEGACY_HISTORY_CAPACITY: usize = 100;

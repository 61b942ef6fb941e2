// Snapshot history for step-through replay

use std::fmt;

/// Where in a comparison a snapshot was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the pair at `active` is compared
    BeforeCompare,
    /// After the pair was compared and, if out of order, swapped
    AfterCompare,
}

/// A full copy of the working array at one instant of the sort
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub values: Vec<T>,
    pub active: (usize, usize), // Indices being compared
    pub phase: Phase,
    pub swapped: bool,
}

/// Errors raised while filling a [`SnapshotHistory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// More snapshots were needed than the history may hold
    CapacityExceeded { required: usize, capacity: usize },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::CapacityExceeded { required, capacity } => {
                write!(
                    f,
                    "Snapshot capacity exceeded: {} snapshots required, capacity is {}",
                    required, capacity
                )
            }
        }
    }
}

impl std::error::Error for HistoryError {}

/// Ordered list of snapshots with an optional hard limit
#[derive(Debug, Clone)]
pub struct SnapshotHistory<T> {
    snapshots: Vec<Snapshot<T>>,
    limit: Option<usize>,
}

impl<T> SnapshotHistory<T> {
    /// Growable history with no limit
    pub fn unbounded() -> Self {
        SnapshotHistory {
            snapshots: Vec::new(),
            limit: None,
        }
    }

    /// History that refuses to hold more than `limit` snapshots
    pub fn with_limit(limit: usize) -> Self {
        SnapshotHistory {
            snapshots: Vec::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Fail early if `required` snapshots would not fit
    pub fn reserve(&mut self, required: usize) -> Result<(), HistoryError> {
        if let Some(limit) = self.limit {
            if required > limit {
                return Err(HistoryError::CapacityExceeded {
                    required,
                    capacity: limit,
                });
            }
        }
        self.snapshots
            .reserve(required.saturating_sub(self.snapshots.len()));
        Ok(())
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot<T>) -> Result<(), HistoryError> {
        if let Some(limit) = self.limit {
            if self.snapshots.len() >= limit {
                return Err(HistoryError::CapacityExceeded {
                    required: self.snapshots.len() + 1,
                    capacity: limit,
                });
            }
        }
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot<T>> {
        self.snapshots.get(index)
    }

    pub fn first(&self) -> Option<&Snapshot<T>> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&Snapshot<T>> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot<T>> {
        self.snapshots.iter()
    }
}

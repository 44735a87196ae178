//! Job model.
//!
//! A job is an immutable (start, end, profit) triple occupying the
//! half-open interval `[start, end)`: a job ending exactly when
//! another starts does not conflict with it.

use serde::{Deserialize, Serialize};

/// A job competing for selection.
///
/// # Time Representation
/// `start` and `end` are integers on an arbitrary shared axis; only
/// their ordering matters. `end == start` (zero-length) is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive; `end == other.start` does not conflict).
    pub end: i64,
    /// Profit earned if this job is selected.
    pub profit: i64,
}

impl Job {
    /// Creates a new job.
    pub fn new(start: i64, end: i64, profit: i64) -> Self {
        Self { start, end, profit }
    }

    /// Whether this job overlaps `other` in time.
    ///
    /// Touching boundaries (`self.end == other.start` or vice versa)
    /// are not a conflict.
    pub fn conflicts_with(&self, other: &Job) -> bool {
        self.start < other.end && other.start < self.end
    }
}

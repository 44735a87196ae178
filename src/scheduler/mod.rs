//! Profit-maximizing selection and remainder reporting.
//!
//! # Algorithm
//!
//! [`maximize_profit`] runs the classic weighted interval scheduling
//! DP over jobs sorted by end time, with an O(log n) binary search for
//! each job's latest non-conflicting predecessor. [`AllocationReport`]
//! wraps the DP for callers: it owns the sort and derives the
//! remainder figures (jobs and profit left unselected).
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

mod report;
mod weighted;

pub use report::AllocationReport;
pub use weighted::{find_last_non_conflict, maximize_profit, Selection};

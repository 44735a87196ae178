//! Weighted interval scheduling.
//!
//! Given jobs with a start time, end time, and profit, selects a
//! maximum-profit subset of non-overlapping jobs (touching intervals
//! allowed) and reports what remains — job count and profit — for a
//! secondary allocation.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Job`](models::Job)
//! - **`scheduler`**: The selection DP ([`maximize_profit`](scheduler::maximize_profit),
//!   [`find_last_non_conflict`](scheduler::find_last_non_conflict)) and derived
//!   reporting ([`AllocationReport`](scheduler::AllocationReport))
//! - **`validation`**: Structural input checks (inverted intervals)
//! - **`input`**: Line-oriented job reading for the interactive binary
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1: Weighted
//!   Interval Scheduling
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod input;
pub mod models;
pub mod scheduler;
pub mod validation;

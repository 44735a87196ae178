//! Allocation reporting.
//!
//! Wraps the selection DP for callers and derives the remainder
//! figures: once one worker takes the profit-maximal subset, how many
//! jobs and how much profit are left over for everyone else.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Profit | Sum of profit over all input jobs |
//! | Selected Profit | Maximum non-overlapping profit (DP result) |
//! | Selected Count | Jobs in the tracked maximal-profit subset |
//! | Tasks Left | Jobs not selected |
//! | Earnings Left | Profit attributable to unselected jobs |

use crate::models::Job;
use crate::scheduler::maximize_profit;

/// Selection outcome plus the figures left for a secondary allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationReport {
    /// Sum of profit over all input jobs (order-independent).
    pub total_profit: i64,
    /// Maximum profit achievable without overlap.
    pub selected_profit: i64,
    /// Number of jobs in the selected subset.
    pub selected_count: usize,
    /// Jobs not selected: `n - selected_count`.
    pub tasks_left: usize,
    /// Profit not captured: `total_profit - selected_profit`.
    pub earnings_left: i64,
}

impl AllocationReport {
    /// Computes the report for a job list in any order.
    ///
    /// Sorts a copy ascending by end time (stable, so ties keep input
    /// order) and runs [`maximize_profit`] over it; callers never
    /// pre-sort. An empty list yields an all-zero report.
    pub fn calculate(jobs: &[Job]) -> Self {
        let total_profit = jobs.iter().map(|job| job.profit).sum();

        let mut sorted = jobs.to_vec();
        sorted.sort_by_key(|job| job.end);
        let best = maximize_profit(&sorted);

        Self {
            total_profit,
            selected_profit: best.profit,
            selected_count: best.count,
            tasks_left: jobs.len() - best.count,
            earnings_left: total_profit - best.profit,
        }
    }
}

//! Weighted interval scheduling DP.
//!
//! # Algorithm
//!
//! 1. Jobs are sorted ascending by end time (the caller's duty here;
//!    [`AllocationReport`](super::AllocationReport) does it for you).
//! 2. `dp[i]` holds the best (profit, count) over `jobs[..=i]`.
//! 3. Each job is either excluded (carry `dp[i-1]`) or included on top
//!    of its latest non-conflicting predecessor, found by binary search.
//!
//! # Complexity
//! O(n log n) over sorted input; O(n) extra space for the DP table.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 6.1

use crate::models::Job;

/// Best achievable outcome over a prefix of the end-sorted jobs.
///
/// One cell of the DP table; the final cell is the answer for the
/// whole job list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Maximum total profit.
    pub profit: i64,
    /// Number of jobs in the profit-maximal subset tracked by the DP.
    pub count: usize,
}

/// Finds the latest job that does not conflict with `jobs[index]`.
///
/// `jobs` must be sorted ascending by end time. Returns the rightmost
/// `j < index` with `jobs[j].end <= jobs[index].start`, or `None` if
/// every earlier job conflicts.
///
/// Uses upper-bound search semantics (insert to the right of equal
/// values), so a job ending exactly at `jobs[index].start` counts as a
/// valid predecessor: touching intervals are allowed. O(log n).
pub fn find_last_non_conflict(jobs: &[Job], index: usize) -> Option<usize> {
    let start = jobs[index].start;
    // End times over jobs[..index] are non-decreasing, so the
    // predicate is a valid partition.
    let insertion = jobs[..index].partition_point(|job| job.end <= start);
    insertion.checked_sub(1)
}

/// Computes the maximum achievable profit and the job count behind it.
///
/// `jobs` must be sorted ascending by end time. An empty slice yields
/// `Selection { profit: 0, count: 0 }`.
///
/// # Tie-break
/// A job is included only when inclusion is *strictly* more profitable
/// than exclusion. On equal profit the exclude outcome wins, keeping
/// the previously chosen count. Equal-profit alternatives with a
/// different job count are not explored; exactly one maximal-profit
/// path is tracked, and the reported count belongs to that path.
///
/// Pure function: same sorted input, same output.
pub fn maximize_profit(jobs: &[Job]) -> Selection {
    if jobs.is_empty() {
        return Selection::default();
    }

    let mut dp: Vec<Selection> = Vec::with_capacity(jobs.len());
    dp.push(Selection {
        profit: jobs[0].profit,
        count: 1,
    });

    for i in 1..jobs.len() {
        let exclude = dp[i - 1];

        let mut include = Selection {
            profit: jobs[i].profit,
            count: 1,
        };
        if let Some(l) = find_last_non_conflict(jobs, i) {
            include.profit += dp[l].profit;
            include.count += dp[l].count;
        }

        dp.push(if include.profit > exclude.profit {
            include
        } else {
            exclude
        });
    }

    let best = dp[jobs.len() - 1];
    tracing::debug!(profit = best.profit, count = best.count, "selection complete");
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_by_end(mut jobs: Vec<Job>) -> Vec<Job> {
        jobs.sort_by_key(|job| job.end);
        jobs
    }

    #[test]
    fn test_predecessor_none_when_all_conflict() {
        let jobs = sorted_by_end(vec![Job::new(0, 3, 5), Job::new(1, 4, 10)]);
        assert_eq!(find_last_non_conflict(&jobs, 1), None);
    }

    #[test]
    fn test_predecessor_touching_boundary() {
        // First job ends exactly where the second starts.
        let jobs = sorted_by_end(vec![Job::new(0, 2, 5), Job::new(2, 4, 5)]);
        assert_eq!(find_last_non_conflict(&jobs, 1), Some(0));
    }

    #[test]
    fn test_predecessor_rightmost_of_equal_ends() {
        // Two jobs sharing an end time; the later index must win.
        let jobs = vec![
            Job::new(0, 2, 5),
            Job::new(1, 2, 7),
            Job::new(2, 6, 3),
        ];
        assert_eq!(find_last_non_conflict(&jobs, 2), Some(1));
    }

    #[test]
    fn test_predecessor_skips_later_conflicts() {
        let jobs = vec![
            Job::new(0, 1, 4),
            Job::new(0, 4, 9),
            Job::new(3, 6, 2),
        ];
        // Job at index 2 starts at 3: only the job ending at 1 fits.
        assert_eq!(find_last_non_conflict(&jobs, 2), Some(0));
    }

    #[test]
    fn test_single_job() {
        let jobs = vec![Job::new(0, 1, 5)];
        let best = maximize_profit(&jobs);
        assert_eq!(best, Selection { profit: 5, count: 1 });
    }

    #[test]
    fn test_overlapping_pair_picks_richer_job() {
        let jobs = sorted_by_end(vec![Job::new(0, 3, 5), Job::new(1, 4, 10)]);
        let best = maximize_profit(&jobs);
        assert_eq!(best, Selection { profit: 10, count: 1 });
    }

    #[test]
    fn test_touching_pair_takes_both() {
        let jobs = sorted_by_end(vec![Job::new(0, 2, 5), Job::new(2, 4, 5)]);
        let best = maximize_profit(&jobs);
        assert_eq!(best, Selection { profit: 10, count: 2 });
    }

    #[test]
    fn test_all_compatible_takes_all() {
        let jobs = vec![
            Job::new(1, 2, 50),
            Job::new(3, 5, 20),
            Job::new(6, 19, 100),
        ];
        let best = maximize_profit(&jobs);
        assert_eq!(best, Selection { profit: 170, count: 3 });
    }

    #[test]
    fn test_classic_mix() {
        // Taking (1,3) + (4,6) beats the single wide job.
        let jobs = sorted_by_end(vec![
            Job::new(1, 3, 50),
            Job::new(2, 5, 60),
            Job::new(4, 6, 70),
        ]);
        let best = maximize_profit(&jobs);
        assert_eq!(best, Selection { profit: 120, count: 2 });
    }

    #[test]
    fn test_equal_profit_prefers_exclude_count() {
        // Duplicate jobs: including the second adds nothing, so the
        // exclude path (count 1) must survive the tie.
        let jobs = vec![Job::new(0, 2, 5), Job::new(0, 2, 5)];
        let best = maximize_profit(&jobs);
        assert_eq!(best, Selection { profit: 5, count: 1 });
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(maximize_profit(&[]), Selection::default());
    }

    #[test]
    fn test_idempotent() {
        let jobs = sorted_by_end(vec![
            Job::new(0, 3, 5),
            Job::new(1, 4, 10),
            Job::new(4, 7, 4),
        ]);
        assert_eq!(maximize_profit(&jobs), maximize_profit(&jobs));
    }

    #[test]
    fn test_profit_monotone_in_prefix() {
        // dp[i].profit never decreases as more jobs become available.
        let jobs = sorted_by_end(vec![
            Job::new(0, 2, 8),
            Job::new(1, 3, 2),
            Job::new(2, 5, 4),
            Job::new(4, 6, 1),
        ]);
        let mut previous = 0;
        for i in 1..=jobs.len() {
            let best = maximize_profit(&jobs[..i]);
            assert!(best.profit >= previous);
            previous = best.profit;
        }
    }
}

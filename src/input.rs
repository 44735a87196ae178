//! Line-oriented job input.
//!
//! Readers for the interactive flow: one integer per line, first the
//! job count, then start / end / profit for each job. Generic over
//! [`BufRead`] so the same code runs against stdin and in-memory test
//! buffers.
//!
//! No recovery: the first malformed or missing line aborts the read.

use std::io::BufRead;

use thiserror::Error;

use crate::models::Job;

/// Errors produced while reading jobs.
#[derive(Debug, Error)]
pub enum InputError {
    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    /// Input ended before the expected value.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
    /// A line did not parse as an integer.
    #[error("invalid integer {value:?} for {field}")]
    Parse {
        /// Which value was being read.
        field: &'static str,
        /// The offending line, trimmed.
        value: String,
    },
}

/// Reads one trimmed line and parses it as an `i64`.
fn read_int<R: BufRead>(reader: &mut R, field: &'static str) -> Result<i64, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof(field));
    }
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| InputError::Parse {
        field,
        value: trimmed.to_string(),
    })
}

/// Reads the job count line.
pub fn read_count<R: BufRead>(reader: &mut R) -> Result<usize, InputError> {
    let n = read_int(reader, "job count")?;
    usize::try_from(n).map_err(|_| InputError::Parse {
        field: "job count",
        value: n.to_string(),
    })
}

/// Reads `count` jobs, three integer lines each: start, end, profit.
pub fn read_jobs<R: BufRead>(reader: &mut R, count: usize) -> Result<Vec<Job>, InputError> {
    let mut jobs = Vec::with_capacity(count);
    for _ in 0..count {
        let start = read_int(reader, "start time")?;
        let end = read_int(reader, "end time")?;
        let profit = read_int(reader, "profit")?;
        jobs.push(Job::new(start, end, profit));
    }
    Ok(jobs)
}

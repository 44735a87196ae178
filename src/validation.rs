//! Input validation for job lists.
//!
//! Checks structural integrity of jobs before scheduling. The core
//! algorithm assumes well-formed intervals; these checks belong to the
//! boundary that accepts external input.

use crate::models::Job;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job ends before it starts.
    InvalidInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job list.
///
/// Checks that every job has `start <= end`. Zero-length jobs are
/// allowed. All problems are collected and reported together.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, job) in jobs.iter().enumerate() {
        if job.end < job.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Job {} ends at {} before it starts at {}",
                    index, job.end, job.start
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Scheduling domain models.
//!
//! A deliberately small model layer: the weighted interval scheduling
//! problem needs only one type, the [`Job`]. Times are plain integers
//! on whatever axis the consumer chooses (hours, slots, epoch ms);
//! the algorithm only compares them.

mod job;

pub use job::Job;

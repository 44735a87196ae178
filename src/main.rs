//! Interactive weighted interval scheduler.
//!
//! Prompts for a job count and (start, end, profit) triples, selects
//! the maximum-profit non-overlapping subset, and prints how many jobs
//! and how much profit remain for a secondary allocation.

use std::io::{self, BufReader};

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use interval_scheduler::input;
use interval_scheduler::scheduler::AllocationReport;
use interval_scheduler::validation::validate_jobs;

fn main() -> Result<()> {
    // Silent unless RUST_LOG asks for output, keeping prompts clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut reader = BufReader::new(io::stdin());

    println!("Enter the number of Jobs");
    let count = input::read_count(&mut reader).context("reading the job count")?;

    println!("Enter job start time, end time, and earnings");
    let jobs = input::read_jobs(&mut reader, count).context("reading jobs")?;

    if let Err(errors) = validate_jobs(&jobs) {
        for error in &errors {
            eprintln!("{}", error.message);
        }
        bail!("{} invalid job(s) in input", errors.len());
    }

    let report = AllocationReport::calculate(&jobs);

    println!("Task: {}", report.tasks_left);
    println!("Earnings: {}", report.earnings_left);

    Ok(())
}

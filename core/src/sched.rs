//! Duration-bounded scheduler.
//!
//! Fans out a fixed pool of worker threads for a single workload, lets each
//! worker drive the workload's operation in a tight loop until a shared
//! wall-clock budget elapses, and aggregates the per-worker counts into one
//! total.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::{error::HarnessError, workload::Workload};

/// Aggregated outcome of one scheduler invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunResult {
    /// Exact sum of all per-worker operation counts.
    pub total_ops: u64,
    pub parallelism: usize,
    /// Wall-clock span observed by the scheduler. At least the configured
    /// budget; exceeded by at most one in-flight operation per worker, since
    /// the time check happens only between operations.
    pub elapsed: Duration,
}

/// Run `workload` at `threads` parallelism for roughly `budget` wall-clock
/// time and return the summed operation count.
///
/// All workers measure against the same start instant, captured before any
/// of them spawn. The budget is a soft lower bound, not an upper bound: a
/// worker finishes its current operation even when the budget expires
/// mid-operation.
///
/// An operation error stops the whole invocation: the failing worker raises
/// a shared stop flag so its siblings wind down at their next iteration
/// boundary, and the error is returned instead of a partial result.
pub fn run_for(
    workload: &dyn Workload,
    threads: usize,
    budget: Duration,
) -> Result<RunResult, HarnessError> {
    if threads == 0 {
        return Err(HarnessError::Config("parallelism must be at least 1".into()));
    }
    if budget.is_zero() {
        return Err(HarnessError::Config("duration must be positive".into()));
    }

    let stop = AtomicBool::new(false);
    let (tx, rx) = crossbeam::channel::bounded::<Result<u64, HarnessError>>(threads);
    let start = Instant::now();

    thread::scope(|scope| {
        for worker in 0..threads {
            let tx = tx.clone();
            let stop = &stop;
            scope.spawn(move || {
                let outcome = run_worker(workload, start, budget, stop);
                if outcome.is_err() {
                    stop.store(true, Ordering::Relaxed);
                }
                // The receiver outlives the scope, so the channel cannot
                // close before this send.
                let _ = tx.send(outcome);
                tracing::trace!(worker, "worker finished");
            });
        }
    });
    drop(tx);

    // The scope join above is the completion barrier; summation order across
    // workers is irrelevant.
    let mut total: u64 = 0;
    for outcome in rx.iter() {
        total += outcome?;
    }

    let elapsed = start.elapsed();
    tracing::debug!(
        workload = workload.name(),
        threads,
        total,
        ?elapsed,
        "scheduler invocation complete"
    );
    Ok(RunResult { total_ops: total, parallelism: threads, elapsed })
}

fn run_worker(
    workload: &dyn Workload,
    start: Instant,
    budget: Duration,
    stop: &AtomicBool,
) -> Result<u64, HarnessError> {
    let mut op = workload.setup()?;
    let mut count: u64 = 0;
    while start.elapsed() < budget && !stop.load(Ordering::Relaxed) {
        op()?;
        count += 1;
    }
    Ok(count)
}

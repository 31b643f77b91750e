//! Benchmark payload definitions.
//!
//! Everything under this module is a collaborator of the engine, not part of
//! it: the scheduler treats each payload as an opaque operation and a report
//! formatter.

use std::time::Duration;

use crate::error::HarnessError;

pub mod compress;
pub mod crypto;
pub mod escape;
pub mod pattern;

/// A repeatable zero-argument action obtained from [`Workload::setup`].
///
/// An `Err` from the operation is a workload invariant violation and aborts
/// the whole run.
pub type Operation = Box<dyn FnMut() -> Result<(), HarnessError> + Send>;

/// A named benchmark payload.
///
/// Each worker thread calls [`Workload::setup`] once, so state captured by
/// the returned closure is private to that worker unless the workload
/// deliberately shares a fixture across its setup calls. Correctness of such
/// sharing is the workload's responsibility.
pub trait Workload: Send + Sync {
    /// Unique name used for registration, filtering and CSV output.
    fn name(&self) -> &str;

    /// Produce a fresh operation closure together with its worker-local
    /// state.
    fn setup(&self) -> Result<Operation, HarnessError>;

    /// Format a raw operation count into a human-readable throughput figure.
    ///
    /// The returned string must be non-empty and must not contain the CSV
    /// field separator.
    fn report(&self, total_ops: u64, duration: Duration) -> String;
}

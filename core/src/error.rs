use thiserror::Error;

/// Fatal conditions recognized by the harness.
///
/// Nothing in this crate retries: every variant escalates to process
/// termination, since a comparison containing one bad measurement is not
/// worth reporting.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Invalid filter pattern, duplicate workload name, or an impossible
    /// parallelism/duration request. Raised before any scheduling starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A profiling capture could not be created or started.
    #[error("resource unavailable: {0}")]
    Resource(String),

    /// A workload's own correctness self-check failed mid-run.
    #[error("workload invariant violated: {0}")]
    WorkloadInvariant(String),
}

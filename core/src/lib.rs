//! Time-boxed throughput comparison harness.
//!
//! The engine runs a registered workload at parallelism 1 and again at a
//! configured parallelism, each for a fixed wall-clock budget, and reports
//! the two operation totals side by side. Workloads are opaque payloads
//! behind the [`workload::Workload`] trait; the engine only counts how often
//! their operations return.

pub mod compare;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod registry;
pub mod report;
pub mod sched;
pub mod workload;

pub use compare::{Comparison, compare};
pub use error::HarnessError;
pub use filter::NameFilter;
pub use fixture::TextFixture;
pub use registry::Registry;
pub use sched::{RunResult, run_for};
pub use workload::{Operation, Workload};

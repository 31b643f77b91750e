//! Single-vs-parallel comparison of one workload.

use std::fmt;
use std::time::Duration;

use crate::{error::HarnessError, sched, workload::Workload};

/// One comparative record: the workload's own report strings for the
/// single-thread and multi-thread runs.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub name: String,
    pub single: String,
    pub multi: String,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.single, self.multi)
    }
}

/// Run `workload` once at parallelism 1 and once at `parallelism`, strictly
/// in that order, and format both totals with the workload's own reporter.
///
/// The two scheduler invocations never overlap. Reports are computed against
/// the configured budget rather than the observed elapsed time, so the two
/// figures divide by the same denominator.
pub fn compare(
    workload: &dyn Workload,
    parallelism: usize,
    budget: Duration,
) -> Result<Comparison, HarnessError> {
    let single = sched::run_for(workload, 1, budget)?;
    let multi = sched::run_for(workload, parallelism, budget)?;
    Ok(Comparison {
        name: workload.name().to_string(),
        single: workload.report(single.total_ops, budget),
        multi: workload.report(multi.total_ops, budget),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::Operation;

    const SHORT: Duration = Duration::from_millis(100);

    struct Noop;

    impl Workload for Noop {
        fn name(&self) -> &str {
            "noop"
        }

        fn setup(&self) -> Result<Operation, HarnessError> {
            Ok(Box::new(|| Ok(())))
        }

        fn report(&self, total_ops: u64, _duration: Duration) -> String {
            format!("{total_ops} ops")
        }
    }

    struct FailsImmediately;

    impl Workload for FailsImmediately {
        fn name(&self) -> &str {
            "fails"
        }

        fn setup(&self) -> Result<Operation, HarnessError> {
            Ok(Box::new(|| {
                Err(HarnessError::WorkloadInvariant("expected failure".into()))
            }))
        }

        fn report(&self, total_ops: u64, _duration: Duration) -> String {
            format!("{total_ops} ops")
        }
    }

    #[test]
    fn record_carries_both_report_strings() {
        let record = compare(&Noop, 2, SHORT).unwrap();
        assert_eq!(record.name, "noop");
        assert!(record.single.ends_with(" ops"));
        assert!(record.multi.ends_with(" ops"));
    }

    #[test]
    fn record_renders_as_one_csv_line() {
        let record = Comparison {
            name: "noop".into(),
            single: "10 ops".into(),
            multi: "19 ops".into(),
        };
        assert_eq!(record.to_string(), "noop,10 ops,19 ops");
    }

    #[test]
    fn failing_workload_aborts_the_comparison() {
        let err = compare(&FailsImmediately, 2, SHORT).unwrap_err();
        assert!(matches!(err, HarnessError::WorkloadInvariant(_)));
    }
}

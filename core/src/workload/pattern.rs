//! Regex scan payloads over the shared synthetic text fixture.

use std::sync::Arc;
use std::time::Duration;

use regex::bytes::Regex;

use crate::{
    error::HarnessError,
    fixture::TextFixture,
    report,
    workload::{Operation, Workload},
};

struct MatchSpec {
    name: &'static str,
    pattern: &'static str,
}

// Difficulty ladder: anchored literals, a case-insensitive variant, small
// character classes, an unbounded-prefix scan, and a wide alternation.
const MATCH_SPECS: &[MatchSpec] = &[
    MatchSpec {
        name: "regex.match easy",
        pattern: "ABCDEFGHIJKLMNOPQRSTUVWXYZ$",
    },
    MatchSpec {
        name: "regex.match easy (i)",
        pattern: "(?i)ABCDEFGHIJklmnopqrstuvwxyz$",
    },
    MatchSpec {
        name: "regex.match easy2",
        pattern: "A[AB]B[BC]C[CD]D[DE]E[EF]F[FG]G[GH]H[HI]I[IJ]J$",
    },
    MatchSpec {
        name: "regex.match medium",
        pattern: "[XYZ]ABCDEFGHIJKLMNOPQRSTUVWXYZ$",
    },
    MatchSpec {
        name: "regex.match hard",
        pattern: "[ -~]*ABCDEFGHIJKLMNOPQRSTUVWXYZ$",
    },
    MatchSpec {
        name: "regex.match hard2",
        pattern: "ABCD|CDEF|EFGH|GHIJ|IJKL|KLMN|MNOP|OPQR|QRST|STUV|UVWX|WXYZ",
    },
];

/// One regex scan payload. Each worker compiles the pattern in its own
/// setup call and scans the shared fixture text. None of the patterns occur
/// in the synthetic text, so an actual match means the payload or the
/// fixture is broken.
pub struct RegexMatch {
    spec: &'static MatchSpec,
    fixture: Arc<TextFixture>,
}

impl Workload for RegexMatch {
    fn name(&self) -> &str {
        self.spec.name
    }

    fn setup(&self) -> Result<Operation, HarnessError> {
        let re = Regex::new(self.spec.pattern).map_err(|e| {
            HarnessError::Config(format!("workload '{}' pattern: {e}", self.spec.name))
        })?;
        let fixture = Arc::clone(&self.fixture);
        let name = self.spec.name;
        Ok(Box::new(move || {
            if re.is_match(fixture.text()) {
                return Err(HarnessError::WorkloadInvariant(format!(
                    "{name}: pattern unexpectedly matched the fixture text"
                )));
            }
            Ok(())
        }))
    }

    fn report(&self, total_ops: u64, duration: Duration) -> String {
        report::ops_per_sec(total_ops, duration)
    }
}

/// All regex scan payloads in their canonical registration order.
pub fn match_workloads(fixture: Arc<TextFixture>) -> Vec<Box<dyn Workload>> {
    MATCH_SPECS
        .iter()
        .map(|spec| {
            Box::new(RegexMatch { spec, fixture: Arc::clone(&fixture) }) as Box<dyn Workload>
        })
        .collect()
}

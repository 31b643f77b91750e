//! CPU profiling session around the benchmark run.

use std::fs::File;
use std::path::Path;

use parbench_core::HarnessError;
use pprof::ProfilerGuard;

const SAMPLE_HZ: i32 = 997;

/// An active CPU profiling capture.
///
/// The output file is created eagerly so a bad path aborts the run before
/// any workload executes; the flamegraph itself is written on
/// [`Session::finish`].
pub struct Session {
    guard: ProfilerGuard<'static>,
    output: File,
    path: String,
}

impl Session {
    pub fn start(path: &Path) -> Result<Self, HarnessError> {
        let output = File::create(path).map_err(|e| {
            HarnessError::Resource(format!("create profile file '{}': {e}", path.display()))
        })?;
        let guard = pprof::ProfilerGuardBuilder::default()
            .frequency(SAMPLE_HZ)
            .blocklist(&["libc", "libgcc", "pthread", "vdso"])
            .build()
            .map_err(|e| HarnessError::Resource(format!("start CPU profiler: {e}")))?;
        Ok(Self {
            guard,
            output,
            path: path.display().to_string(),
        })
    }

    /// Stop sampling and write the flamegraph.
    pub fn finish(self) -> Result<(), HarnessError> {
        let report = self
            .guard
            .report()
            .build()
            .map_err(|e| HarnessError::Resource(format!("collect CPU profile: {e}")))?;
        report
            .flamegraph(&self.output)
            .map_err(|e| HarnessError::Resource(format!("write profile to '{}': {e}", self.path)))?;
        tracing::info!(path = %self.path, "wrote CPU profile flamegraph");
        Ok(())
    }
}

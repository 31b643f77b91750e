use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use parbench_core::{NameFilter, Registry, TextFixture, compare};

mod profile;

#[derive(Debug, Parser)]
#[command(
    name = "parbench",
    version,
    about = "Time-boxed single-vs-parallel throughput comparison",
    long_about = None
)]
struct CliArgs {
    /// Write a CPU profile flamegraph to this path
    #[arg(long, value_name = "FILE")]
    cpuprofile: Option<PathBuf>,

    /// Worker threads for the parallel run; 0 means all logical CPUs
    #[arg(short = 'c', long = "threads", default_value_t = 0, allow_hyphen_values = true)]
    threads: i64,

    /// Duration of each benchmark run in seconds
    #[arg(short = 't', long = "duration", default_value_t = 10)]
    duration: u64,

    /// Regex selecting which workloads to run
    #[arg(short = 'r', long = "run", default_value = ".*")]
    run: String,
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Negative requests clamp to the default, which is all logical CPUs.
fn resolve_threads(requested: i64) -> usize {
    let requested = requested.max(0) as usize;
    if requested == 0 { num_cpus::get() } else { requested }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    anyhow::ensure!(args.duration > 0, "duration must be at least 1 second");
    let budget = Duration::from_secs(args.duration);
    let threads = resolve_threads(args.threads);

    // Validate the filter before any benchmarking starts.
    let filter = NameFilter::new(&args.run)?;

    let fixture = Arc::new(TextFixture::new());
    let registry = Registry::standard(fixture)?;

    tracing::info!(
        threads,
        cpus = num_cpus::get(),
        duration_secs = args.duration,
        "starting benchmark run"
    );

    let mut session = args
        .cpuprofile
        .as_deref()
        .map(profile::Session::start)
        .transpose()?;

    for workload in filter.select(&registry) {
        let record = compare(workload, threads, budget)?;
        println!("{record}");
    }

    if let Some(session) = session.take() {
        session.finish()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::resolve_threads;

    #[test]
    fn negative_thread_requests_clamp_to_the_cpu_default() {
        assert_eq!(resolve_threads(-7), resolve_threads(0));
        assert!(resolve_threads(-7) >= 1);
    }

    #[test]
    fn explicit_thread_requests_pass_through() {
        assert_eq!(resolve_threads(3), 3);
    }
}

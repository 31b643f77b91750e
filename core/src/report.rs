//! Conventional report formatters shared by the built-in payloads.

use std::time::Duration;

/// Operations per second, for payloads with a fixed per-operation cost.
pub fn ops_per_sec(total_ops: u64, duration: Duration) -> String {
    format!("{:.2} ops/s", total_ops as f64 / duration.as_secs_f64())
}

/// Throughput in MiB/s, for payloads that process a known byte count per
/// operation.
pub fn mib_per_sec(total_ops: u64, bytes_per_op: usize, duration: Duration) -> String {
    let mib = (total_ops as f64 * bytes_per_op as f64) / (1024.0 * 1024.0);
    format!("{:.2} MiB/s", mib / duration.as_secs_f64())
}

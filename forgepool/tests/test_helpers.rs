// Shared helpers for forgepool integration tests.
#![allow(dead_code)]

use std::time::Duration;

use forgepool::WorkerPool;

/// Quiet logging for test runs; safe to call from every test.
pub fn init_logging() {
    forgepool::logging::init_test();
}

/// Builds a pool of `n` workers for a test.
pub fn pool_of(n: usize) -> anyhow::Result<WorkerPool> {
    Ok(WorkerPool::with_threads(n)?)
}

/// Deterministic per-job delay used to jitter completion order.
pub fn jitter(i: usize) -> Duration {
    Duration::from_millis(((i * 7) % 40 + 5) as u64)
}

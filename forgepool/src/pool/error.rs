use thiserror::Error;

/// Errors reported synchronously by
/// [`WorkerPool::submit`](crate::pool::controller::WorkerPool::submit).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Pool is stopped")]
    PoolStopped,
}

/// Failure of a single job, delivered through its
/// [`JobHandle`](crate::pool::outcome::JobHandle).
///
/// A job failure is not a pool-level fault: it is captured where the job ran
/// and stored in that job's result channel, and the pool keeps serving
/// subsequent submissions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    /// The job panicked; the payload is rendered best-effort.
    #[error("Job panicked: {0}")]
    Panicked(String),
}

/// Errors raised while constructing a pool.
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("Failed to spawn worker thread: {0}")]
    Io(#[from] std::io::Error),
}

#![doc = " Fixed-size worker thread pool with FIFO admission and one-shot results."]

pub mod config;
pub mod controller;
pub mod error;
pub mod job;
pub mod outcome;
pub mod queue;
pub mod worker;

// Re-export key types for easier usage
pub use config::PoolConfig;
pub use controller::WorkerPool;
pub use error::{JobError, SpawnError, SubmitError};
pub use outcome::JobHandle;

// Forgepool
//
// This crate provides a fixed-size pool of OS worker threads fed from a
// shared FIFO job queue. Each submitted job gets a one-shot handle that
// delivers its value, or the panic that killed it, back to the submitter.

pub mod logging;
pub mod pool;

// Re-export commonly used types
pub use pool::config::PoolConfig;
pub use pool::controller::WorkerPool;
pub use pool::error::{JobError, SpawnError, SubmitError};
pub use pool::outcome::JobHandle;

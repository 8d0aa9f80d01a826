// Integration tests for error types in forgepool::pool::error

use std::io;

use forgepool::{JobError, SpawnError, SubmitError};

#[test]
fn submit_error_display() {
    assert_eq!(SubmitError::PoolStopped.to_string(), "Pool is stopped");
}

#[test]
fn job_error_display() {
    assert_eq!(
        JobError::Panicked("boom".to_string()).to_string(),
        "Job panicked: boom"
    );
}

#[test]
fn spawn_error_display_includes_source() {
    let err = SpawnError::from(io::Error::new(io::ErrorKind::Other, "no threads left"));
    assert!(err.to_string().starts_with("Failed to spawn worker thread:"));
    assert!(err.to_string().contains("no threads left"));
}

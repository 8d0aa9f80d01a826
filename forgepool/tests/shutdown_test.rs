// Integration tests for the shutdown protocol: idempotence, drain semantics
// and rejection of late submissions.

#[path = "test_helpers.rs"]
mod test_helpers;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use forgepool::SubmitError;
use test_helpers::{init_logging, pool_of};

#[test]
fn shutdown_is_idempotent() -> anyhow::Result<()> {
    init_logging();
    let pool = pool_of(2)?;
    assert!(!pool.stopped());
    pool.shutdown();
    assert!(pool.stopped());
    pool.shutdown();
    pool.shutdown();
    assert!(pool.stopped());
    Ok(())
}

#[test]
fn shutdown_drains_accepted_jobs() -> anyhow::Result<()> {
    init_logging();
    let pool = pool_of(1)?;
    let ran = Arc::new(AtomicUsize::new(0));
    let mut handles = Vec::new();
    for _ in 0..5 {
        let ran = Arc::clone(&ran);
        handles.push(pool.submit(move || {
            thread::sleep(Duration::from_millis(20));
            ran.fetch_add(1, Ordering::SeqCst);
        })?);
    }
    pool.shutdown();
    // Shutdown is a drain: after it returns, every accepted job has run and
    // every handle is already completed.
    assert_eq!(ran.load(Ordering::SeqCst), 5);
    for handle in &handles {
        assert!(handle.is_finished());
    }
    for handle in handles {
        assert!(handle.join().is_ok());
    }
    assert_eq!(pool.pending(), 0);
    Ok(())
}

#[test]
fn submit_after_shutdown_is_rejected() -> anyhow::Result<()> {
    init_logging();
    let pool = pool_of(2)?;
    pool.shutdown();
    match pool.submit(|| 1) {
        Err(SubmitError::PoolStopped) => {}
        Ok(_) => panic!("submission accepted after shutdown"),
    }
    assert_eq!(pool.pending(), 0);
    Ok(())
}

#[test]
fn drop_performs_drain_and_join() -> anyhow::Result<()> {
    init_logging();
    let ran = Arc::new(AtomicUsize::new(0));
    {
        let pool = pool_of(2)?;
        for _ in 0..4 {
            let ran = Arc::clone(&ran);
            pool.submit(move || {
                thread::sleep(Duration::from_millis(10));
                ran.fetch_add(1, Ordering::SeqCst);
            })?;
        }
        // Dropped here without an explicit shutdown call.
    }
    assert_eq!(ran.load(Ordering::SeqCst), 4);
    Ok(())
}

#[test]
fn concurrent_shutdown_calls_do_not_race() -> anyhow::Result<()> {
    init_logging();
    let pool = Arc::new(pool_of(2)?);
    for _ in 0..8 {
        pool.submit(|| thread::sleep(Duration::from_millis(5)))?;
    }
    let other = {
        let pool = Arc::clone(&pool);
        thread::spawn(move || pool.shutdown())
    };
    pool.shutdown();
    other.join().unwrap();
    assert!(pool.stopped());
    Ok(())
}

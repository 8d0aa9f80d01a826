// Verifies that independent jobs actually run in parallel across workers.

#[path = "test_helpers.rs"]
mod test_helpers;

use std::thread;
use std::time::{Duration, Instant};

use test_helpers::{init_logging, pool_of};

#[test]
fn four_sleeping_jobs_overlap_on_four_workers() -> anyhow::Result<()> {
    init_logging();
    let pool = pool_of(4)?;
    let start = Instant::now();
    let handles: Vec<_> = (0..4)
        .map(|_| pool.submit(|| thread::sleep(Duration::from_millis(100))))
        .collect::<Result<_, _>>()?;
    for handle in handles {
        handle.join().unwrap();
    }
    let elapsed = start.elapsed();
    // Sequential execution would need ~400ms. The upper bound leaves
    // headroom for slow CI schedulers while still proving overlap.
    assert!(elapsed >= Duration::from_millis(100));
    assert!(
        elapsed < Duration::from_millis(350),
        "jobs did not overlap: {:?}",
        elapsed
    );
    Ok(())
}

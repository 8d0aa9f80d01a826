// Demonstrates drain-style shutdown: jobs queued before the stop flag still
// run to completion, while a late submission is rejected.

use std::thread;
use std::time::Duration;

use forgepool::{logging, WorkerPool};

fn main() -> anyhow::Result<()> {
    logging::init_default();

    let pool = WorkerPool::with_threads(2)?;
    let mut handles = Vec::new();
    for i in 0..6u32 {
        handles.push(pool.submit(move || {
            thread::sleep(Duration::from_millis(40));
            i
        })?);
    }

    println!("pending before shutdown: {}", pool.pending());
    pool.shutdown();
    println!("stopped: {}", pool.stopped());

    for handle in handles {
        println!("drained job -> {:?}", handle.join());
    }

    match pool.submit(|| 99) {
        Err(e) => println!("late submission rejected: {e}"),
        Ok(_) => unreachable!("pool accepted work after shutdown"),
    }
    Ok(())
}

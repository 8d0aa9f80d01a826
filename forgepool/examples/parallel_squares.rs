// Submits eight squaring jobs with uneven delays onto a four-worker pool,
// then prints the results in submission order.

use std::thread;
use std::time::Duration;

use forgepool::{logging, WorkerPool};

fn main() -> anyhow::Result<()> {
    logging::init_development();

    let pool = WorkerPool::with_threads(4)?;
    let mut handles = Vec::new();
    for i in 0..8u64 {
        let delay = Duration::from_millis((i % 3) * 30);
        handles.push(pool.submit(move || {
            thread::sleep(delay);
            i * i
        })?);
    }

    for (i, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(square) => println!("{i}^2 = {square}"),
            Err(e) => eprintln!("job {i} failed: {e}"),
        }
    }

    pool.shutdown();
    Ok(())
}

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use crate::pool::error::SpawnError;
use crate::pool::queue::JobQueue;

/// State shared between the controller and every worker.
///
/// The job queue, the stop flag and the condvar waits are all guarded by this
/// single mutex; jobs themselves execute with the lock released.
pub(crate) struct PoolState {
    inner: Mutex<PoolInner>,
    cond: Condvar,
}

pub(crate) struct PoolInner {
    pub(crate) queue: JobQueue,
    /// Monotonic: flips false to true once, never reverts.
    pub(crate) stopped: bool,
}

impl PoolState {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(PoolInner {
                queue: JobQueue::new(),
                stopped: false,
            }),
            cond: Condvar::new(),
        }
    }

    // Jobs trap their own panics, so a poisoned pool lock cannot leave the
    // queue or the stop flag mid-mutation; recover the guard.
    pub(crate) fn lock(&self) -> MutexGuard<'_, PoolInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Wakes one waiting worker (after a push).
    pub(crate) fn notify_one(&self) {
        self.cond.notify_one();
    }

    /// Wakes every waiting worker (at shutdown).
    pub(crate) fn notify_all(&self) {
        self.cond.notify_all();
    }
}

/// Spawns one worker thread running the agent loop.
pub(crate) fn spawn(
    index: usize,
    name_prefix: &str,
    state: Arc<PoolState>,
) -> Result<JoinHandle<()>, SpawnError> {
    let name = format!("{}-{}", name_prefix, index);
    let handle = thread::Builder::new()
        .name(name)
        .spawn(move || run(index, state))?;
    Ok(handle)
}

/// The agent loop.
///
/// Waits on the condvar while the queue is empty and the pool is running,
/// pops one job in FIFO order, runs it with the lock released, and loops.
/// The loop exits only when the stop flag is set and the queue is empty, so
/// a worker never abandons accepted work.
fn run(index: usize, state: Arc<PoolState>) {
    debug!(worker = index, "worker started");
    loop {
        let job = {
            let mut inner = state.lock();
            loop {
                if inner.stopped && inner.queue.is_empty() {
                    debug!(worker = index, "worker exiting");
                    return;
                }
                if let Some(job) = inner.queue.pop() {
                    break job;
                }
                inner = state
                    .cond
                    .wait(inner)
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
            }
        };
        trace!(worker = index, "job dequeued");
        // Outcome recording and panic containment live inside the job itself.
        job();
    }
}

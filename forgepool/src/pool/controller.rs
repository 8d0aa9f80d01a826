use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tracing::{debug, error, info, trace};

use crate::pool::config::PoolConfig;
use crate::pool::error::{SpawnError, SubmitError};
use crate::pool::job;
use crate::pool::outcome::{JobHandle, OutcomeSlot};
use crate::pool::worker::{self, PoolState};

/// A fixed-size pool of OS worker threads fed from a shared FIFO queue.
///
/// Workers start running at construction and the count never changes
/// afterwards. Submission hands back a [`JobHandle`] that blocks for that
/// job's value or captured failure. Shutdown is a drain: every job accepted
/// before the stop flag was set still runs, and the call blocks until all
/// workers have exited.
///
/// # Thread Safety
/// - One mutex guards the queue, the stop flag and the condvar waits.
/// - Jobs execute with that lock released, so long-running work never blocks
///   other workers from dequeuing.
/// - Each job's result channel carries its own synchronization.
///
/// # Examples
///
/// ```rust
/// use forgepool::WorkerPool;
///
/// let pool = WorkerPool::with_threads(2).unwrap();
/// let handle = pool.submit(|| 6 * 7).unwrap();
/// assert_eq!(handle.join(), Ok(42));
/// ```
pub struct WorkerPool {
    /// Queue + stop flag + condvar, shared with every worker.
    state: Arc<PoolState>,

    /// Worker join handles, taken by whichever call performs the shutdown.
    workers: Mutex<Vec<JoinHandle<()>>>,

    /// Fixed worker count, recorded at construction.
    size: usize,

    /// Submission sequence counter, used only for log correlation.
    next_seq: AtomicU64,
}

impl WorkerPool {
    /// Creates a pool with the platform-suggested worker count
    /// (one worker per logical CPU).
    pub fn new() -> Result<Self, SpawnError> {
        Self::with_config(PoolConfig::default())
    }

    /// Creates a pool with `threads` workers. Zero is clamped to one.
    pub fn with_threads(threads: usize) -> Result<Self, SpawnError> {
        Self::with_config(PoolConfig::default().threads(threads))
    }

    /// Creates a pool from an explicit configuration.
    ///
    /// Workers start immediately. A requested count of zero is not an error;
    /// it is clamped to one.
    pub fn with_config(config: PoolConfig) -> Result<Self, SpawnError> {
        let size = config.threads.max(1);
        if size != config.threads {
            debug!("zero workers requested, clamping to one");
        }

        let state = Arc::new(PoolState::new());
        let mut handles = Vec::with_capacity(size);
        for index in 0..size {
            match worker::spawn(index, &config.thread_name_prefix, Arc::clone(&state)) {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    // Release the workers that did start before reporting
                    // the failure, or they would wait forever.
                    state.lock().stopped = true;
                    state.notify_all();
                    for handle in handles {
                        if handle.join().is_err() {
                            error!("worker thread panicked during pool teardown");
                        }
                    }
                    return Err(e);
                }
            }
        }

        debug!(workers = size, "pool started");
        Ok(Self {
            state,
            workers: Mutex::new(handles),
            size,
            next_seq: AtomicU64::new(0),
        })
    }

    /// Submits an operation for execution on the pool.
    ///
    /// Arguments are bound by closure capture, so `op` reaches the queue with
    /// no remaining free parameters. On acceptance one waiting worker is
    /// woken and a [`JobHandle`] is returned; the handle blocks until that
    /// job's value, or the panic captured while running it, is available.
    ///
    /// Fails with [`SubmitError::PoolStopped`] once [`shutdown`] has been
    /// invoked; nothing is enqueued in that case.
    ///
    /// [`shutdown`]: WorkerPool::shutdown
    pub fn submit<F, T>(&self, op: F) -> Result<JobHandle<T>, SubmitError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let slot = Arc::new(OutcomeSlot::new());
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let job = job::bind(seq, op, Arc::clone(&slot));
        {
            let mut inner = self.state.lock();
            if inner.stopped {
                return Err(SubmitError::PoolStopped);
            }
            inner.queue.push(job);
        }
        self.state.notify_one();
        trace!(job = seq, "job enqueued");
        Ok(JobHandle::new(slot))
    }

    /// Stops the pool and blocks until it has drained.
    ///
    /// The first call sets the stop flag under the lock, wakes every worker
    /// and joins them; workers keep executing until the queue is empty, so
    /// jobs accepted before the flag are drained, not discarded. Subsequent
    /// calls (and `Drop`) are no-ops.
    pub fn shutdown(&self) {
        let first_call = {
            let mut inner = self.state.lock();
            if inner.stopped {
                false
            } else {
                inner.stopped = true;
                true
            }
        };
        if !first_call {
            return;
        }

        info!(workers = self.size, "pool shutting down");
        self.state.notify_all();

        let handles = {
            let mut workers = self
                .workers
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            std::mem::take(&mut *workers)
        };
        for handle in handles {
            // Workers trap job panics, so a panic here is a pool bug.
            if handle.join().is_err() {
                error!("worker thread panicked");
            }
        }
        debug!("pool drained and joined");
    }

    /// Fixed worker count, set at construction.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Snapshot of jobs waiting in the queue.
    ///
    /// Excludes jobs already picked up by a worker but still executing.
    /// Advisory only: the value may be stale the instant it is read.
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Whether [`shutdown`](WorkerPool::shutdown) has been invoked.
    pub fn stopped(&self) -> bool {
        self.state.lock().stopped
    }
}

impl Drop for WorkerPool {
    /// Drains and joins the workers if the user never called
    /// [`shutdown`](WorkerPool::shutdown).
    fn drop(&mut self) {
        self.shutdown();
    }
}

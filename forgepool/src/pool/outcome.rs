use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use crate::pool::error::JobError;

/// Completion state of a result channel.
enum State<T> {
    Pending,
    Done(Result<T, JobError>),
}

/// One-shot result channel between the worker that executes a job (producer)
/// and the caller that submitted it (consumer).
///
/// # Thread Safety
/// - Guarded by its own mutex and condvar pair, never the pool lock, so a
///   blocked consumer cannot stall the queue.
/// - Exactly one write occurs over the slot's lifetime; the consumer blocks
///   on the condvar until that write, and reads after completion return
///   without blocking.
pub struct OutcomeSlot<T> {
    state: Mutex<State<T>>,
    cond: Condvar,
}

impl<T> OutcomeSlot<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(State::Pending),
            cond: Condvar::new(),
        }
    }

    /// Records the job outcome and wakes the waiting consumer.
    ///
    /// Called exactly once, by the worker that ran the job.
    pub(crate) fn complete(&self, outcome: Result<T, JobError>) {
        let mut state = self.lock_state();
        debug_assert!(
            matches!(*state, State::Pending),
            "outcome written twice into the same slot"
        );
        *state = State::Done(outcome);
        self.cond.notify_all();
    }

    /// Blocks until the outcome has been written, then takes it.
    pub(crate) fn take(&self) -> Result<T, JobError> {
        let mut state = self.lock_state();
        loop {
            match std::mem::replace(&mut *state, State::Pending) {
                State::Done(outcome) => return outcome,
                State::Pending => {
                    state = self
                        .cond
                        .wait(state)
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                }
            }
        }
    }

    /// Non-blocking completion probe.
    pub(crate) fn is_done(&self) -> bool {
        matches!(*self.lock_state(), State::Done(_))
    }

    // A poisoned slot lock can only mean the consumer panicked mid-wait; the
    // state itself is a plain enum and stays coherent, so recover the guard.
    fn lock_state(&self) -> MutexGuard<'_, State<T>> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Consumer half of a result channel, returned by
/// [`WorkerPool::submit`](crate::pool::controller::WorkerPool::submit).
///
/// Retrieval is one-shot by construction: [`JobHandle::join`] consumes the
/// handle, so asking for the outcome twice is rejected at compile time rather
/// than trapped at run time.
pub struct JobHandle<T> {
    slot: Arc<OutcomeSlot<T>>,
}

impl<T> JobHandle<T> {
    pub(crate) fn new(slot: Arc<OutcomeSlot<T>>) -> Self {
        Self { slot }
    }

    /// Blocks until the job has run, then returns its value or the failure
    /// that was captured while executing it.
    ///
    /// Jobs accepted by the pool always run, even across a shutdown, so this
    /// never blocks forever.
    pub fn join(self) -> Result<T, JobError> {
        self.slot.take()
    }

    /// Returns `true` once the job's outcome has been recorded.
    ///
    /// Advisory snapshot; a `false` may be stale by the time it is observed.
    pub fn is_finished(&self) -> bool {
        self.slot.is_done()
    }
}

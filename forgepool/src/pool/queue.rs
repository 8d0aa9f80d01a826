use std::collections::VecDeque;

use crate::pool::job::Job;

/// FIFO buffer of jobs awaiting a worker.
///
/// Not independently thread-safe: the queue lives inside the pool's
/// mutex-guarded state, so every call here happens with the pool lock held.
/// FIFO ordering is the only ordering guarantee; there is no priority, no
/// deduplication and no capacity limit.
pub struct JobQueue {
    items: VecDeque<Job>,
}

impl JobQueue {
    pub(crate) fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Appends a job at the tail.
    pub(crate) fn push(&mut self, job: Job) {
        self.items.push_back(job);
    }

    /// Removes and returns the job at the head, if any.
    pub(crate) fn pop(&mut self) -> Option<Job> {
        self.items.pop_front()
    }

    /// Number of jobs currently waiting.
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

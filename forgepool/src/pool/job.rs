use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::error;

use crate::pool::error::JobError;
use crate::pool::outcome::OutcomeSlot;

/// A type-erased, boxed unit of deferred execution.
///
/// Argument binding happens at submission time through closure capture, so by
/// the time a job reaches the queue it is callable with no remaining free
/// parameters.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Binds a caller operation and its outcome slot into a [`Job`].
///
/// The returned closure traps panics itself, which keeps the worker loop free
/// of per-job error handling: exactly one outcome is written to `slot`
/// whether the operation returns normally or panics.
///
/// `seq` is the job's submission sequence number, used only for log
/// correlation.
pub fn bind<F, T>(seq: u64, op: F, slot: Arc<OutcomeSlot<T>>) -> Job
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Box::new(move || match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => slot.complete(Ok(value)),
        Err(payload) => {
            let msg = panic_message(payload);
            error!(job = seq, error = %msg, "job panicked");
            slot.complete(Err(JobError::Panicked(msg)));
        }
    })
}

/// Best-effort extraction of a readable message from a panic payload.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "job panicked with a non-string payload".to_string(),
        },
    }
}

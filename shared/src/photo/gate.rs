use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Rejects a second submission while one is still in flight.
///
/// Clones share the same flag, so a gate can be handed to the async task
/// that performs the upload.
#[derive(Debug, Clone, Default)]
pub struct SubmissionGate {
    busy: Rc<Cell<bool>>,
}

/// Held for the duration of a submission; releases the gate on drop.
#[derive(Debug)]
pub struct SubmissionTicket {
    busy: Rc<Cell<bool>>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<SubmissionTicket> {
        if self.busy.get() {
            return None;
        }
        self.busy.set(true);
        Some(SubmissionTicket {
            busy: Rc::clone(&self.busy),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl SubmissionTicket {
    /// Awaits `attempt`, then runs `reset` and releases the gate, whatever
    /// the attempt returned.
    pub async fn settle<F, R>(self, attempt: F, reset: R) -> F::Output
    where
        F: Future,
        R: FnOnce(),
    {
        let output = attempt.await;
        reset();
        drop(self);
        output
    }
}

impl PartialEq for SubmissionGate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.busy, &other.busy)
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

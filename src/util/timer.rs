//! Deferred single-shot callbacks.
//!
//! The language switch defers its rewrite behind the fade-out. The delay is
//! routed through [`Scheduler`] so tests can run or hold the deferred work
//! explicitly instead of waiting on a real timer.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;

/// Work scheduled to run once.
pub type Task = Box<dyn FnOnce()>;

/// Runs a task once after a delay.
pub trait Scheduler {
    fn defer(&self, delay_ms: u32, task: Task);
}

/// Browser timer via `setTimeout`. There is no cancellation path.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "csr")]
impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Task) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}

/// Runs every task immediately, ignoring the delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn defer(&self, _delay_ms: u32, task: Task) {
        task();
    }
}

/// Holds tasks until [`QueueScheduler::run_pending`] is called.
#[derive(Default)]
pub struct QueueScheduler {
    pending: RefCell<Vec<(u32, Task)>>,
}

impl QueueScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Delays requested by the waiting tasks, in scheduling order.
    #[must_use]
    pub fn delays(&self) -> Vec<u32> {
        self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run waiting tasks shortest requested delay first, treating them all as
    /// scheduled at the same instant; equal delays keep scheduling order.
    /// Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut tasks = std::mem::take(&mut *self.pending.borrow_mut());
        tasks.sort_by_key(|(delay, _)| *delay);
        let ran = tasks.len();
        for (_, task) in tasks {
            task();
        }
        ran
    }
}

impl Scheduler for QueueScheduler {
    fn defer(&self, delay_ms: u32, task: Task) {
        self.pending.borrow_mut().push((delay_ms, task));
    }
}

//! Periodic task scheduling
//!
//! Both the pressing wall sweep and the session timer are "run this every N
//! ms until cancelled". `Scheduler` hides whether that is `setInterval` in a
//! browser or a virtual clock in tests.

mod browser;
mod manual;

pub use browser::BrowserScheduler;
pub use manual::ManualScheduler;

use crate::core::SceneError;

/// Source of time and repeating callbacks
pub trait Scheduler {
    /// Wall-clock milliseconds
    fn now_ms(&self) -> f64;

    /// Run `task` every `period_ms` until the returned handle is cancelled
    /// or dropped.
    fn every(&self, period_ms: f64, task: Box<dyn FnMut()>) -> Result<TaskHandle, SceneError>;
}

/// Owner of one periodic task.
///
/// `cancel` is idempotent, and dropping the handle cancels the task.
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::core::SceneError;

use super::{Scheduler, TaskHandle};

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

struct Task {
    id: u64,
    period: f64,
    start: f64,
    fired: u64,
    run: Callback,
}

impl Task {
    fn due(&self) -> f64 {
        self.start + (self.fired + 1) as f64 * self.period
    }
}

#[derive(Default)]
struct Inner {
    now: Cell<f64>,
    next_id: Cell<u64>,
    tasks: RefCell<Vec<Task>>,
}

/// Virtual clock: time only moves when `advance` is called.
///
/// Tasks fire in due order with `now_ms` set to their due time, so a 100 ms
/// task started at t=0 reads exactly 100, 200, ... Used by tests and headless
/// runs.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<Inner>,
}

// Absorbs float error when comparing due times against the target.
const DUE_EPSILON_MS: f64 = 1e-6;

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `ms`, firing every task that comes due.
    pub fn advance(&self, ms: f64) {
        let target = self.inner.now.get() + ms;

        loop {
            let next = {
                let tasks = self.inner.tasks.borrow();
                tasks
                    .iter()
                    .filter(|t| t.due() <= target + DUE_EPSILON_MS)
                    .min_by(|a, b| a.due().total_cmp(&b.due()).then(a.id.cmp(&b.id)))
                    .map(|t| (t.id, t.due(), Rc::clone(&t.run)))
            };
            let Some((id, due, run)) = next else {
                break;
            };

            self.inner.now.set(due.max(self.inner.now.get()));
            if let Some(task) = self.inner.tasks.borrow_mut().iter_mut().find(|t| t.id == id) {
                task.fired += 1;
            }
            // Task list is not borrowed here, so the callback may cancel
            // itself or schedule more work.
            (&mut *run.borrow_mut())();
        }

        self.inner.now.set(target);
    }

    /// Tasks scheduled and not yet cancelled
    pub fn active_tasks(&self) -> usize {
        self.inner.tasks.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.inner.now.get()
    }

    fn every(&self, period_ms: f64, task: Box<dyn FnMut()>) -> Result<TaskHandle, SceneError> {
        if !(period_ms.is_finite() && period_ms > 0.0) {
            return Err(SceneError::Schedule(format!("period must be positive, got {period_ms}")));
        }

        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.tasks.borrow_mut().push(Task {
            id,
            period: period_ms,
            start: self.inner.now.get(),
            fired: 0,
            run: Rc::new(RefCell::new(task)),
        });

        let inner: Weak<Inner> = Rc::downgrade(&self.inner);
        Ok(TaskHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.tasks.borrow_mut().retain(|t| t.id != id);
            }
        }))
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::SceneError;

use super::schedule::{Scheduler, TaskHandle};

/// Render an elapsed time the way the page shows it.
pub fn format_elapsed(secs: f64) -> String {
    format!("Time: {secs:.2}s")
}

/// Where the timer text goes. The page uses an element; tests use a string.
pub trait Readout {
    fn show(&self, text: &str);
}

impl Readout for RefCell<String> {
    fn show(&self, text: &str) {
        let mut slot = self.borrow_mut();
        slot.clear();
        slot.push_str(text);
    }
}

/// Start instant of the current run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionClock {
    start_ms: f64,
}

impl SessionClock {
    pub fn started_at(start_ms: f64) -> Self {
        Self { start_ms }
    }

    pub fn elapsed_secs(&self, now_ms: f64) -> f64 {
        ((now_ms - self.start_ms) / 1000.0).max(0.0)
    }

    pub fn label(&self, now_ms: f64) -> String {
        format_elapsed(self.elapsed_secs(now_ms))
    }
}

enum Phase {
    Stopped,
    Running { clock: SessionClock, task: TaskHandle },
}

/// Elapsed time since the last start, refreshed on every tick.
///
/// Every start resets the clock; pausing freezes the last shown text.
pub struct SessionTimer {
    readout: Rc<dyn Readout>,
    phase: Phase,
}

impl SessionTimer {
    pub fn new(readout: Rc<dyn Readout>) -> Self {
        Self {
            readout,
            phase: Phase::Stopped,
        }
    }

    /// Returns false if already running.
    pub fn start(&mut self, scheduler: &Rc<dyn Scheduler>, period_ms: f64) -> Result<bool, SceneError> {
        if self.is_running() {
            return Ok(false);
        }

        let clock = SessionClock::started_at(scheduler.now_ms());
        self.readout.show(&clock.label(clock.start_ms));

        let readout = Rc::clone(&self.readout);
        let source = Rc::clone(scheduler);
        let task = scheduler.every(
            period_ms,
            Box::new(move || readout.show(&clock.label(source.now_ms()))),
        )?;
        self.phase = Phase::Running { clock, task };
        Ok(true)
    }

    pub fn pause(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Stopped) {
            Phase::Running { mut task, .. } => {
                task.cancel();
                true
            }
            Phase::Stopped => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Current label while running, `None` while stopped.
    pub fn elapsed_label(&self, now_ms: f64) -> Option<String> {
        match &self.phase {
            Phase::Running { clock, .. } => Some(clock.label(now_ms)),
            Phase::Stopped => None,
        }
    }
}

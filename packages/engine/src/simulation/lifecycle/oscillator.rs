use std::cell::RefCell;
use std::rc::Rc;

use crate::core::SceneError;

use super::schedule::{Scheduler, TaskHandle};
use super::SceneCore;

enum Phase {
    Stopped,
    Running(TaskHandle),
}

/// Drives the pressing wall sweep.
///
/// At most one tick task exists at a time: starting while running is a no-op,
/// and pausing cancels the task before returning.
pub struct Oscillator {
    phase: Phase,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new()
    }
}

impl Oscillator {
    pub fn new() -> Self {
        Self { phase: Phase::Stopped }
    }

    /// Begin ticking every `period_ms`. Returns false if already running.
    pub fn start(
        &mut self,
        scheduler: &Rc<dyn Scheduler>,
        scene: &Rc<RefCell<SceneCore>>,
        period_ms: f64,
    ) -> Result<bool, SceneError> {
        if self.is_running() {
            return Ok(false);
        }

        let scene = Rc::clone(scene);
        let handle = scheduler.every(
            period_ms,
            Box::new(move || match scene.try_borrow_mut() {
                Ok(mut scene) => {
                    scene.advance_pressing_wall();
                }
                Err(_) => log::warn!("oscillation tick skipped: scene busy"),
            }),
        )?;
        self.phase = Phase::Running(handle);
        Ok(true)
    }

    /// Stop ticking. Returns false if already stopped.
    pub fn pause(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Stopped) {
            Phase::Running(mut handle) => {
                handle.cancel();
                true
            }
            Phase::Stopped => false,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }
}

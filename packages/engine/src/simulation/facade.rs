use std::cell::RefCell;
use std::rc::Rc;

use crate::core::SceneError;
use crate::domain::input::ShapeKind;
use crate::rigid_body_system::BodyId;

use super::schedule::Scheduler;
use super::timer::{format_elapsed, Readout, SessionTimer};
use super::{Oscillator, SceneCore};

/// Scene plus the two periodic controllers, started and paused together.
pub struct Simulation {
    scene: Rc<RefCell<SceneCore>>,
    scheduler: Rc<dyn Scheduler>,
    oscillator: Oscillator,
    timer: SessionTimer,
}

impl Simulation {
    pub fn new(scene: SceneCore, scheduler: Rc<dyn Scheduler>, readout: Rc<dyn Readout>) -> Self {
        readout.show(&format_elapsed(0.0));
        Self {
            scene: Rc::new(RefCell::new(scene)),
            scheduler,
            oscillator: Oscillator::new(),
            timer: SessionTimer::new(readout),
        }
    }

    /// Shared handle for render loops and input listeners.
    pub fn scene(&self) -> Rc<RefCell<SceneCore>> {
        Rc::clone(&self.scene)
    }

    /// Start the wall sweep and the timer. Returns false when already running.
    pub fn start(&mut self) -> Result<bool, SceneError> {
        if self.is_running() {
            log::warn!("start ignored: already running");
            return Ok(false);
        }

        let (wall_period, timer_period) = {
            let scene = self.scene.borrow();
            (scene.settings().wall_period_ms(), scene.settings().timer_period_ms())
        };

        self.oscillator.start(&self.scheduler, &self.scene, wall_period)?;
        if let Err(err) = self.timer.start(&self.scheduler, timer_period) {
            self.oscillator.pause();
            log::error!("start failed, sweep rolled back: {err}");
            return Err(err);
        }

        log::info!("simulation started");
        Ok(true)
    }

    /// Stop both controllers. Returns false when already paused.
    pub fn pause(&mut self) -> bool {
        let label = self.timer_text();
        let wall = self.oscillator.pause();
        let timer = self.timer.pause();
        match (wall || timer, label) {
            (true, Some(label)) => log::info!("simulation paused ({label})"),
            (true, None) => log::info!("simulation paused"),
            (false, _) => log::warn!("pause ignored: not running"),
        }
        wall || timer
    }

    pub fn is_running(&self) -> bool {
        self.oscillator.is_running() && self.timer.is_running()
    }

    /// Timer label for the current instant, `None` while paused.
    pub fn timer_text(&self) -> Option<String> {
        self.timer.elapsed_label(self.scheduler.now_ms())
    }

    pub fn add_body(&self, shape: ShapeKind, raw_size: &str, raw_color: &str) -> Result<BodyId, SceneError> {
        self.scene.borrow_mut().add_body(shape, raw_size, raw_color)
    }

    pub fn add_body_from_palette(&self, shape: ShapeKind, raw_size: &str) -> Result<BodyId, SceneError> {
        self.scene.borrow_mut().add_body_from_palette(shape, raw_size)
    }

    /// Rebuild the boundaries for a new viewport. Controllers keep running.
    pub fn resize(&self, viewport_width: f32, viewport_height: f32) {
        self.scene.borrow_mut().resize(viewport_width, viewport_height);
    }

    pub fn pressing_wall_x(&self) -> f32 {
        self.scene.borrow().pressing_wall_x()
    }
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::SceneError;

use super::{Scheduler, TaskHandle};

/// `setInterval` / `clearInterval` on the page window
#[derive(Clone)]
pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    pub fn new() -> Result<Self, SceneError> {
        let window = web_sys::window().ok_or_else(|| SceneError::MissingElement("window".to_string()))?;
        Ok(Self { window })
    }
}

/// Whole-millisecond `setInterval` delay for `period_ms`.
///
/// Truncates like the browser does with a fractional delay, so a 60 Hz period
/// becomes 16 ms rather than 17.
fn interval_delay_ms(period_ms: f64) -> i32 {
    period_ms.trunc().clamp(1.0, i32::MAX as f64) as i32
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn every(&self, period_ms: f64, task: Box<dyn FnMut()>) -> Result<TaskHandle, SceneError> {
        let callback = Closure::wrap(task);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                interval_delay_ms(period_ms),
            )
            .map_err(SceneError::schedule)?;

        let window = self.window.clone();
        Ok(TaskHandle::new(move || {
            window.clear_interval_with_handle(id);
            // the JS side no longer references the closure
            drop(callback);
        }))
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::core::SceneError;
use crate::domain::input::ShapeKind;
use crate::domain::settings::Settings;
use crate::simulation::schedule::{BrowserScheduler, Scheduler};
use crate::simulation::{Readout, SceneCore, Simulation};

use super::bridge;
use super::dom::{self, ElementReadout};
use super::painter::Painter;

fn to_js(err: SceneError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Handle to the mounted scene
#[wasm_bindgen]
pub struct App {
    sim: Rc<RefCell<Simulation>>,
}

/// Build the scene on the current page and wire every control.
///
/// `settings_json` is an optional camelCase settings bundle; omitted fields
/// keep their defaults.
#[wasm_bindgen]
pub fn mount(settings_json: Option<String>) -> Result<App, JsValue> {
    let mut settings = match settings_json {
        Some(json) => Settings::from_json(&json).map_err(to_js)?,
        None => Settings::default(),
    };
    if settings.rng_seed.is_none() {
        settings.rng_seed = Some(js_sys::Date::now() as u64 as u32);
    }

    let ids = settings.elements.clone();
    let canvas: HtmlCanvasElement = dom::element(&ids.canvas, "canvas").map_err(to_js)?;
    let readout: Rc<dyn Readout> = Rc::new(ElementReadout::new(dom::html_element(&ids.timer).map_err(to_js)?));

    let (width, height) = bridge::viewport().map_err(to_js)?;
    let painter = Painter::new(canvas).map_err(to_js)?;
    painter.fit(width, height);

    let scene = SceneCore::new(settings, width, height).map_err(to_js)?;
    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new().map_err(to_js)?);
    let sim = Rc::new(RefCell::new(Simulation::new(scene, scheduler, readout)));

    bridge::wire(&sim, &ids, painter).map_err(to_js)?;
    log::info!("mounted on #{}", ids.canvas);
    Ok(App { sim })
}

#[wasm_bindgen]
impl App {
    /// Start the wall sweep and timer; false when already running.
    pub fn start(&self) -> Result<bool, JsValue> {
        self.sim.borrow_mut().start().map_err(to_js)
    }

    pub fn pause(&self) -> bool {
        self.sim.borrow_mut().pause()
    }

    #[wasm_bindgen(js_name = addCircle)]
    pub fn add_circle(&self, size: &str, color: &str) -> Result<(), JsValue> {
        self.sim
            .borrow()
            .add_body(ShapeKind::Circle, size, color)
            .map(|_| ())
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = addRectangle)]
    pub fn add_rectangle(&self, size: &str, color: &str) -> Result<(), JsValue> {
        self.sim
            .borrow()
            .add_body(ShapeKind::Rectangle, size, color)
            .map(|_| ())
            .map_err(to_js)
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.sim.borrow().resize(width, height);
    }

    #[wasm_bindgen(getter, js_name = dynamicBodyCount)]
    pub fn dynamic_body_count(&self) -> usize {
        self.sim.borrow().scene().borrow().dynamic_body_count()
    }

    #[wasm_bindgen(getter, js_name = boundaryCount)]
    pub fn boundary_count(&self) -> usize {
        self.sim.borrow().scene().borrow().boundary_count()
    }

    #[wasm_bindgen(getter, js_name = pressingWallX)]
    pub fn pressing_wall_x(&self) -> f32 {
        self.sim.borrow().pressing_wall_x()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.sim.borrow().is_running()
    }

    /// "Time: X.XXs" while running, undefined while paused.
    #[wasm_bindgen(js_name = timerText)]
    pub fn timer_text(&self) -> Option<String> {
        self.sim.borrow().timer_text()
    }
}

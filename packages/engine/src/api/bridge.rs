//! Page wiring: buttons, inputs, pointer, window resize and the frame loop.
//!
//! Every listener lives as long as the page, so closures are leaked with
//! `forget` once attached.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

use crate::core::SceneError;
use crate::domain::input::ShapeKind;
use crate::domain::settings::ElementIds;
use crate::rigid_body::Vec2;
use crate::simulation::Simulation;

use super::dom;
use super::painter::Painter;

/// Current viewport size in CSS pixels
pub fn viewport() -> Result<(f32, f32), SceneError> {
    let window = dom::window()?;
    let read = |v: Result<JsValue, JsValue>| -> Result<f32, SceneError> {
        let v = v.map_err(SceneError::dom)?;
        v.as_f64()
            .map(|n| n as f32)
            .ok_or_else(|| SceneError::Dom(format!("viewport size is not a number: {v:?}")))
    };
    Ok((read(window.inner_width())?, read(window.inner_height())?))
}

/// Attach every listener the page needs.
pub fn wire(sim: &Rc<RefCell<Simulation>>, ids: &ElementIds, painter: Painter) -> Result<(), SceneError> {
    let size: HtmlInputElement = dom::element(&ids.size, "input")?;
    let color: Option<HtmlInputElement> = dom::optional_element(&ids.color_picker, "input")?;
    if color.is_none() {
        log::info!("no #{} on the page, fills come from the palette", ids.color_picker);
    }
    let status = ids.status.clone();

    for (id, shape) in [(&ids.add_circle, ShapeKind::Circle), (&ids.add_rectangle, ShapeKind::Rectangle)] {
        let (sim, size, color, status) = (Rc::clone(sim), size.clone(), color.clone(), status.clone());
        on_click(&dom::html_element(id)?, move || {
            let sim = sim.borrow();
            let spawned = match &color {
                Some(color) => sim.add_body(shape, &size.value(), &color.value()),
                None => sim.add_body_from_palette(shape, &size.value()),
            };
            match spawned {
                Ok(_) => dom::set_text(&status, ""),
                Err(err) => dom::set_text(&status, &err.to_string()),
            }
        });
    }

    let start_sim = Rc::clone(sim);
    on_click(&dom::html_element(&ids.start_button)?, move || {
        let Ok(mut sim) = start_sim.try_borrow_mut() else {
            return;
        };
        if let Err(err) = sim.start() {
            log::error!("start failed: {err}");
        }
    });

    let pause_sim = Rc::clone(sim);
    on_click(&dom::html_element(&ids.pause_button)?, move || {
        if let Ok(mut sim) = pause_sim.try_borrow_mut() {
            sim.pause();
        }
    });

    let canvas: HtmlCanvasElement = dom::element(&ids.canvas, "canvas")?;
    wire_pointer(sim, &canvas)?;

    let painter = Rc::new(painter);
    wire_resize(sim, &painter)?;
    run_frames(sim, painter)
}

fn on_click(el: &HtmlElement, mut f: impl FnMut() + 'static) {
    let cb = Closure::wrap(Box::new(move || f()) as Box<dyn FnMut()>);
    el.set_onclick(Some(cb.as_ref().unchecked_ref()));
    cb.forget();
}

fn listen(
    target: &EventTarget,
    event: &str,
    f: impl FnMut(MouseEvent) + 'static,
) -> Result<(), SceneError> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(MouseEvent)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(SceneError::dom)?;
    cb.forget();
    Ok(())
}

fn wire_pointer(sim: &Rc<RefCell<Simulation>>, canvas: &HtmlCanvasElement) -> Result<(), SceneError> {
    let at = |e: &MouseEvent| Vec2::new(e.offset_x() as f32, e.offset_y() as f32);

    let scene = sim.borrow().scene();
    listen(canvas, "mousedown", move |e| {
        if let Ok(mut scene) = scene.try_borrow_mut() {
            scene.pointer_down(at(&e));
        }
    })?;

    let scene = sim.borrow().scene();
    listen(canvas, "mousemove", move |e| {
        if let Ok(mut scene) = scene.try_borrow_mut() {
            scene.pointer_move(at(&e));
        }
    })?;

    for event in ["mouseup", "mouseleave"] {
        let scene = sim.borrow().scene();
        listen(canvas, event, move |_| {
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.pointer_up();
            }
        })?;
    }
    Ok(())
}

fn wire_resize(sim: &Rc<RefCell<Simulation>>, painter: &Rc<Painter>) -> Result<(), SceneError> {
    let (sim, painter) = (Rc::clone(sim), Rc::clone(painter));
    let cb = Closure::wrap(Box::new(move || match viewport() {
        Ok((w, h)) => {
            painter.fit(w, h);
            sim.borrow().resize(w, h);
        }
        Err(err) => log::warn!("resize ignored: {err}"),
    }) as Box<dyn FnMut()>);
    dom::window()?
        .add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
        .map_err(SceneError::dom)?;
    cb.forget();
    Ok(())
}

/// Advance the engine by the real time since the last frame and repaint,
/// once per animation frame, forever.
fn run_frames(sim: &Rc<RefCell<Simulation>>, painter: Rc<Painter>) -> Result<(), SceneError> {
    let scene = sim.borrow().scene();
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = Rc::clone(&f);
    let mut last_ms = js_sys::Date::now();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now_ms = js_sys::Date::now();
        let elapsed_ms = now_ms - last_ms;
        last_ms = now_ms;

        if let Ok(mut scene) = scene.try_borrow_mut() {
            scene.advance(elapsed_ms);
            painter.paint(&scene.render_frame());
        }

        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = dom::request_animation_frame(next) {
                log::error!("frame loop stopped: {err}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        dom::request_animation_frame(first)?;
    }
    Ok(())
}

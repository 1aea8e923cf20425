use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::core::SceneError;
use crate::simulation::Readout;

pub fn window() -> Result<Window, SceneError> {
    web_sys::window().ok_or_else(|| SceneError::MissingElement("window".to_string()))
}

pub fn document() -> Result<Document, SceneError> {
    window()?
        .document()
        .ok_or_else(|| SceneError::MissingElement("document".to_string()))
}

/// Look up `#id` and cast it. `expected` names the type for the error.
pub fn element<T: JsCast>(id: &str, expected: &'static str) -> Result<T, SceneError> {
    optional_element(id, expected)?.ok_or_else(|| SceneError::MissingElement(id.to_string()))
}

/// Like `element`, but a missing node is `Ok(None)`. A node of the wrong
/// type is still an error.
pub fn optional_element<T: JsCast>(id: &str, expected: &'static str) -> Result<Option<T>, SceneError> {
    let Some(el) = document()?.get_element_by_id(id) else {
        return Ok(None);
    };
    el.dyn_into::<T>()
        .map(Some)
        .map_err(|_: Element| SceneError::WrongElement {
            id: id.to_string(),
            expected,
        })
}

pub fn html_element(id: &str) -> Result<HtmlElement, SceneError> {
    element(id, "HTML element")
}

pub fn set_text(id: &str, text: &str) {
    if let Ok(Some(el)) = document().map(|d| d.get_element_by_id(id)) {
        el.set_text_content(Some(text));
    }
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, SceneError> {
    window()?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .map_err(SceneError::dom)
}

/// Timer text written into a page element
pub struct ElementReadout {
    el: HtmlElement,
}

impl ElementReadout {
    pub fn new(el: HtmlElement) -> Self {
        Self { el }
    }
}

impl Readout for ElementReadout {
    fn show(&self, text: &str) {
        self.el.set_text_content(Some(text));
    }
}

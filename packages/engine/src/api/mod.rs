//! Browser surface: page lookup, canvas painting, event wiring and the
//! `#[wasm_bindgen]` exports.

pub mod bridge;
pub mod dom;
pub mod painter;
pub mod wasm;

//! Pressbox Engine - a walled box, a sweeping pressing wall and whatever
//! the user drops in, stepped by rapier2d and drawn on a canvas.
//!
//! Architecture:
//! - core/          - Errors shared by every layer
//! - domain/        - Box geometry, user input, settings
//! - systems/       - Rigid body types and the physics world
//! - simulation/    - Scene state, wall sweep, timer, scheduling
//! - api/           - Browser wiring and wasm exports

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

// Short paths for the physics layer
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    // A second call finds the logger already set; that is fine.
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pressbox engine {} initialized", version());
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use crate::api::wasm::{mount, App};
pub use crate::core::SceneError;
pub use crate::domain::settings::{BoundaryLayout, Settings};
pub use crate::simulation::{SceneCore, Simulation};

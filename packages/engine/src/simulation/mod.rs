//! Scene - the box, its walls and everything dropped into it
//!
//! `SceneCore` owns the physics world and the box geometry and is the only
//! thing that mutates them. Periodic work (the pressing wall sweep, the
//! session timer) runs through `schedule::Scheduler` and is owned by the
//! `Simulation` facade, which shares the core behind `Rc<RefCell<_>>`.
//!
//! Submodules keep one concern each:
//! - boundaries: wall construction and rebuild on resize
//! - rigid / commands: spawning bodies from raw page input
//! - step: engine stepping and the pressing wall sweep
//! - render: per-frame extraction for the painter

use crate::core::SceneError;
use crate::domain::geometry::BoxGeometry;
use crate::domain::input::ShapeKind;
use crate::domain::settings::{BoundaryLayout, Settings};
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{BodyId, DragConstraint, PhysicsWorld};

#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "boundaries/boundaries.rs"]
mod boundaries;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "step/oscillate.rs"]
mod oscillate;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "lifecycle/oscillator.rs"]
mod oscillator;
#[path = "lifecycle/timer.rs"]
mod timer;
pub mod schedule;
mod facade;

pub use boundaries::{boundary_spec, BoundaryKind, BoundarySet};
pub use facade::Simulation;
pub use oscillate::next_wall_x;
pub use oscillator::Oscillator;
pub use render_extract::RenderFrame;
pub use timer::{format_elapsed, Readout, SessionClock, SessionTimer};

/// The scene state behind every callback
pub struct SceneCore {
    settings: Settings,
    geometry: BoxGeometry,
    physics: PhysicsWorld,
    boundaries: BoundarySet,
    layout: BoundaryLayout,
    drag: DragConstraint,

    // Pressing wall x, advanced by the oscillation tick
    pressing_x: f32,

    // State
    viewport: (f32, f32),
    frame: u64,
    // Real time not yet consumed by a fixed step
    step_backlog_ms: f64,
    wraps: u32,
    rng_state: u32,
}

impl SceneCore {
    /// Build the box for a viewport of the given size.
    pub fn new(settings: Settings, viewport_width: f32, viewport_height: f32) -> Result<Self, SceneError> {
        init::create_scene_core(settings, viewport_width, viewport_height)
    }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn geometry(&self) -> &BoxGeometry { &self.geometry }

    pub fn physics(&self) -> &PhysicsWorld { &self.physics }

    pub fn boundaries(&self) -> &BoundarySet { &self.boundaries }

    pub fn layout(&self) -> BoundaryLayout { self.layout }

    pub fn viewport(&self) -> (f32, f32) { self.viewport }

    /// Engine steps taken so far
    pub fn frame(&self) -> u64 { self.frame }

    /// How many times the pressing wall snapped back to the left
    pub fn wraps(&self) -> u32 { self.wraps }

    pub fn pressing_wall_x(&self) -> f32 { self.pressing_x }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    /// Switch wall dimensions; rebuilds the boundaries right away.
    pub fn set_boundary_layout(&mut self, layout: BoundaryLayout) {
        settings::set_boundary_layout(self, layout);
    }

    // === BODIES ===

    /// Parse raw size/color input and spawn. Nothing is added on error.
    pub fn add_body(&mut self, shape: ShapeKind, raw_size: &str, raw_color: &str) -> Result<BodyId, SceneError> {
        commands::add_body(self, shape, raw_size, raw_color)
    }

    /// Like `add_body`, with a fill picked from the configured palette.
    pub fn add_body_from_palette(&mut self, shape: ShapeKind, raw_size: &str) -> Result<BodyId, SceneError> {
        commands::add_body_from_palette(self, shape, raw_size)
    }

    pub fn add_circle(&mut self, raw_size: &str, raw_color: &str) -> Result<BodyId, SceneError> {
        self.add_body(ShapeKind::Circle, raw_size, raw_color)
    }

    pub fn add_rectangle(&mut self, raw_size: &str, raw_color: &str) -> Result<BodyId, SceneError> {
        self.add_body(ShapeKind::Rectangle, raw_size, raw_color)
    }

    pub fn dynamic_body_count(&self) -> usize {
        rigid::dynamic_body_count(self)
    }

    /// Walls, ground and pressing wall currently in the world
    pub fn boundary_count(&self) -> usize {
        rigid::boundary_count(self)
    }

    // === BOUNDARIES ===

    /// Swap the four boundary bodies for fresh ones in a single call.
    pub fn rebuild_boundaries(&mut self) {
        boundaries::rebuild(self);
    }

    /// Viewport changed: remember the size and rebuild the boundaries.
    ///
    /// The box geometry is not recomputed, so the walls come back where they
    /// were and dynamic bodies stay inside them.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport = (viewport_width, viewport_height);
        boundaries::rebuild(self);
        log::info!(
            "resize to {viewport_width}x{viewport_height}: {} boundary bodies",
            self.boundary_count()
        );
    }

    // === STEPPING ===

    /// One oscillation tick; returns the new pressing wall x.
    pub fn advance_pressing_wall(&mut self) -> f32 {
        oscillate::advance_pressing_wall(self)
    }

    /// One engine step, with the drag spring applied first.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Let `elapsed_ms` of real time pass; returns the engine steps taken.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        step::advance(self, elapsed_ms)
    }

    // === POINTER ===

    pub fn pointer_down(&mut self, at: Vec2) -> Option<BodyId> {
        commands::pointer_down(self, at)
    }

    pub fn pointer_move(&mut self, at: Vec2) {
        commands::pointer_move(self, at)
    }

    pub fn pointer_up(&mut self) {
        commands::pointer_up(self)
    }

    pub fn dragged_body(&self) -> Option<BodyId> {
        self.drag.held()
    }

    // === RENDERING ===

    pub fn render_frame(&self) -> RenderFrame<'_> {
        render_extract::extract(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

use crate::core::SceneError;
use crate::domain::geometry::BoxGeometry;
use crate::domain::settings::Settings;
use crate::rigid_body_system::{DragConstraint, PhysicsWorld};

use super::boundaries;
use super::random;
use super::SceneCore;

pub(super) fn create_scene_core(
    settings: Settings,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<SceneCore, SceneError> {
    settings.validate()?;

    let geometry = BoxGeometry::centered(
        viewport_width,
        viewport_height,
        settings.box_width,
        settings.box_height,
        settings.thickness,
    );
    let layout = settings.boundary_layout;

    let mut physics = PhysicsWorld::new(settings.gravity, settings.physics_hz, settings.pixels_per_meter);
    let pressing_x = boundaries::pressing_wall_home(&geometry, layout);
    let boundaries = boundaries::add_set(&mut physics, &geometry, layout, pressing_x, &settings);

    log::info!(
        "scene: {}x{} box at ({}, {}) in a {viewport_width}x{viewport_height} viewport, {layout:?} walls",
        geometry.box_width,
        geometry.box_height,
        geometry.box_x,
        geometry.box_y,
    );

    Ok(SceneCore {
        drag: DragConstraint::new(settings.drag_stiffness),
        rng_state: random::seed(settings.rng_seed),
        settings,
        geometry,
        physics,
        boundaries,
        layout,
        pressing_x,
        viewport: (viewport_width, viewport_height),
        frame: 0,
        step_backlog_ms: 0.0,
        wraps: 0,
    })
}

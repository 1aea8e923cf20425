use crate::domain::geometry::BoxGeometry;
use crate::rigid_body::Vec2;

use super::SceneCore;

/// Next pressing wall x after one tick, and whether it wrapped.
///
/// The wall moves right by `step`; once it is past the right wall by more
/// than a thickness it snaps back to just left of the box. No bounce.
pub fn next_wall_x(x: f32, step: f32, geometry: &BoxGeometry) -> (f32, bool) {
    let advanced = x + step;
    if advanced > geometry.wrap_limit() {
        (geometry.wrap_reset(), true)
    } else {
        (advanced, false)
    }
}

pub(super) fn advance_pressing_wall(scene: &mut SceneCore) -> f32 {
    let (x, wrapped) = next_wall_x(scene.pressing_x, scene.settings.wall_step, &scene.geometry);
    scene.pressing_x = x;

    let id = scene.boundaries.pressing_wall;
    let y = scene.physics.position(id).map_or(scene.geometry.box_y, |p| p.y);
    if wrapped {
        // A glide back across the whole box would fling every body with it.
        scene.physics.teleport(id, Vec2::new(x, y));
        scene.wraps += 1;
        log::debug!("pressing wall wrapped to x={x}");
    } else {
        scene.physics.glide(id, Vec2::new(x, y));
    }
    x
}

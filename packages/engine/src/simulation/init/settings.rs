use crate::domain::settings::BoundaryLayout;

use super::boundaries;
use super::SceneCore;

pub(super) fn set_gravity(scene: &mut SceneCore, gravity: f32) {
    scene.settings.gravity = gravity;
    scene.physics.set_gravity(gravity);
}

pub(super) fn set_boundary_layout(scene: &mut SceneCore, layout: BoundaryLayout) {
    if scene.layout == layout {
        return;
    }
    scene.layout = layout;
    scene.settings.boundary_layout = layout;
    boundaries::rebuild(scene);
}

use crate::rigid_body_system::BodyView;

use super::SceneCore;

/// Everything the painter needs for one animation frame
pub struct RenderFrame<'a> {
    pub width: f32,
    pub height: f32,
    pub background: &'a str,
    /// Boundaries first, then dynamic bodies, so bodies draw over the walls.
    pub bodies: Vec<BodyView<'a>>,
}

pub(super) fn extract(scene: &SceneCore) -> RenderFrame<'_> {
    let (width, height) = scene.viewport;
    let mut bodies: Vec<BodyView<'_>> = scene.physics.bodies().collect();
    // stable sort: engine order is kept inside each group
    bodies.sort_by_key(|b| b.dynamic);

    RenderFrame {
        width,
        height,
        background: &scene.settings.background,
        bodies,
    }
}

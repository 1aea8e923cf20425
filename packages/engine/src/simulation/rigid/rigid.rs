use crate::domain::input::{FillColor, ShapeKind, SpawnSize};
use crate::rigid_body::BodySpec;
use crate::rigid_body_system::BodyId;

use super::random;
use super::SceneCore;

/// Spawn a dynamic body just above the box, at a random x that keeps its full
/// width inside the box.
pub(super) fn spawn_body(scene: &mut SceneCore, shape: ShapeKind, size: SpawnSize, fill: FillColor) -> BodyId {
    let size = size.get() as f32;
    let half = shape.half_extent(size);
    let g = scene.geometry;

    let (lo, hi) = g.spawn_x_range(half);
    let x = lo + random::unit(&mut scene.rng_state) * (hi - lo);
    let y = g.box_y - half;

    let spec = match shape {
        ShapeKind::Circle => BodySpec::new_circle(x, y, size),
        ShapeKind::Rectangle => BodySpec::new_rect(x, y, size, size),
    }
    .with_material(scene.settings.restitution, scene.settings.friction)
    .with_fill(fill.into_string());

    let id = scene.physics.add(&spec);
    log::debug!("spawned {shape} size {size} at ({x:.1}, {y:.1}) fill {}", spec.fill);
    id
}

pub(super) fn dynamic_body_count(scene: &SceneCore) -> usize {
    scene.physics.dynamic_count()
}

pub(super) fn boundary_count(scene: &SceneCore) -> usize {
    scene.physics.static_count()
}

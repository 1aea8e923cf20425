use crate::core::SceneError;
use crate::domain::input::{FillColor, ShapeKind, SpawnSize};
use crate::rigid_body::Vec2;
use crate::rigid_body_system::BodyId;

use super::random;
use super::rigid;
use super::SceneCore;

pub(super) fn add_body(
    scene: &mut SceneCore,
    shape: ShapeKind,
    raw_size: &str,
    raw_color: &str,
) -> Result<BodyId, SceneError> {
    let parsed = SpawnSize::parse(raw_size, shape, &scene.geometry)
        .and_then(|size| FillColor::parse(raw_color).map(|fill| (size, fill)));

    match parsed {
        Ok((size, fill)) => Ok(rigid::spawn_body(scene, shape, size, fill)),
        Err(err) => {
            log::warn!("rejected {shape} spawn: {err}");
            Err(err)
        }
    }
}

pub(super) fn add_body_from_palette(
    scene: &mut SceneCore,
    shape: ShapeKind,
    raw_size: &str,
) -> Result<BodyId, SceneError> {
    let size = SpawnSize::parse(raw_size, shape, &scene.geometry).inspect_err(|err| {
        log::warn!("rejected {shape} spawn: {err}");
    })?;
    let fill = palette_color(scene)?;
    Ok(rigid::spawn_body(scene, shape, size, fill))
}

fn palette_color(scene: &mut SceneCore) -> Result<FillColor, SceneError> {
    let palette = &scene.settings.palette;
    let idx = random::xorshift32(&mut scene.rng_state) as usize % palette.len().max(1);
    let raw = palette
        .get(idx)
        .ok_or_else(|| SceneError::Settings("palette is empty".to_string()))?;
    FillColor::parse(raw)
}

pub(super) fn pointer_down(scene: &mut SceneCore, at: Vec2) -> Option<BodyId> {
    scene.drag.press(&scene.physics, at)
}

pub(super) fn pointer_move(scene: &mut SceneCore, at: Vec2) {
    scene.drag.move_to(at);
}

pub(super) fn pointer_up(scene: &mut SceneCore) {
    scene.drag.release();
}

use crate::domain::geometry::BoxGeometry;
use crate::domain::settings::{BoundaryLayout, Settings};
use crate::rigid_body::BodySpec;
use crate::rigid_body_system::{BodyId, PhysicsWorld};

use super::SceneCore;

// Classic layout extras, in pixels unless noted.
const CLASSIC_RIGHT_WALL_EXTRA_HEIGHT: f32 = 40.0;
/// Ground shelf overhang, in wall thicknesses
const CLASSIC_GROUND_EXTRA_THICKNESSES: f32 = 25.0;
const CLASSIC_PRESSING_OFFSET_X: f32 = -7.0;
const CLASSIC_PRESSING_OFFSET_Y: f32 = -15.0;
const CLASSIC_PRESSING_EXTRA_HEIGHT: f32 = 70.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    LeftWall,
    RightWall,
    Ground,
    PressingWall,
}

impl BoundaryKind {
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::LeftWall,
        BoundaryKind::RightWall,
        BoundaryKind::Ground,
        BoundaryKind::PressingWall,
    ];
}

/// The one live set of boundary bodies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundarySet {
    pub left_wall: BodyId,
    pub right_wall: BodyId,
    pub ground: BodyId,
    pub pressing_wall: BodyId,
}

impl BoundarySet {
    pub fn get(&self, kind: BoundaryKind) -> BodyId {
        match kind {
            BoundaryKind::LeftWall => self.left_wall,
            BoundaryKind::RightWall => self.right_wall,
            BoundaryKind::Ground => self.ground,
            BoundaryKind::PressingWall => self.pressing_wall,
        }
    }

    pub fn ids(&self) -> [BodyId; 4] {
        BoundaryKind::ALL.map(|kind| self.get(kind))
    }
}

/// Describe one boundary body. Walls and ground are fixed; the pressing
/// wall is kinematic so the sweep shoves dynamic bodies instead of
/// tunnelling through them.
pub fn boundary_spec(
    kind: BoundaryKind,
    geometry: &BoxGeometry,
    layout: BoundaryLayout,
    wall_fill: &str,
    pressing_fill: &str,
) -> BodySpec {
    let BoxGeometry { box_width: bw, box_height: bh, box_x: bx, box_y: by, thickness: t } = *geometry;
    let mid_y = by + bh / 2.0;

    let wall = |x: f32, y: f32, w: f32, h: f32| BodySpec::new_rect(x, y, w, h).fixed().with_fill(wall_fill);

    match (kind, layout) {
        (BoundaryKind::LeftWall, _) => wall(bx - t / 2.0, mid_y, t, bh),

        (BoundaryKind::RightWall, BoundaryLayout::Classic) => {
            wall(bx + bw + t / 2.0, mid_y, t, bh + CLASSIC_RIGHT_WALL_EXTRA_HEIGHT)
        }
        (BoundaryKind::RightWall, BoundaryLayout::Symmetric) => wall(bx + bw + t / 2.0, mid_y, t, bh),

        (BoundaryKind::Ground, BoundaryLayout::Classic) => wall(
            bx + bw / 2.0,
            by + bh + t / 2.0,
            bw + CLASSIC_GROUND_EXTRA_THICKNESSES * t,
            t,
        ),
        (BoundaryKind::Ground, BoundaryLayout::Symmetric) => wall(bx + bw / 2.0, by + bh + t / 2.0, bw, t),

        (BoundaryKind::PressingWall, BoundaryLayout::Classic) => BodySpec::new_rect(
            bx + CLASSIC_PRESSING_OFFSET_X + t / 2.0,
            mid_y + CLASSIC_PRESSING_OFFSET_Y,
            t,
            bh + CLASSIC_PRESSING_EXTRA_HEIGHT,
        )
        .kinematic()
        .with_fill(pressing_fill),
        (BoundaryKind::PressingWall, BoundaryLayout::Symmetric) => {
            BodySpec::new_rect(bx + bw + t / 2.0, mid_y, t, bh)
                .kinematic()
                .with_fill(pressing_fill)
        }
    }
}

/// Starting x of the pressing wall for a layout
pub(super) fn pressing_wall_home(geometry: &BoxGeometry, layout: BoundaryLayout) -> f32 {
    boundary_spec(BoundaryKind::PressingWall, geometry, layout, "", "").pos.x
}

/// Build all four boundary bodies and add them to the world. The pressing
/// wall is placed at `pressing_x` rather than its layout home.
pub(super) fn add_set(
    physics: &mut PhysicsWorld,
    geometry: &BoxGeometry,
    layout: BoundaryLayout,
    pressing_x: f32,
    settings: &Settings,
) -> BoundarySet {
    let mut add = |kind: BoundaryKind| {
        let mut spec = boundary_spec(
            kind,
            geometry,
            layout,
            &settings.wall_color,
            &settings.pressing_wall_color,
        );
        if kind == BoundaryKind::PressingWall {
            spec.pos.x = pressing_x;
        }
        physics.add(&spec)
    };

    BoundarySet {
        left_wall: add(BoundaryKind::LeftWall),
        right_wall: add(BoundaryKind::RightWall),
        ground: add(BoundaryKind::Ground),
        pressing_wall: add(BoundaryKind::PressingWall),
    }
}

/// Remove the live set, then add its replacement. Both halves happen in this
/// call, so no frame is ever drawn without walls.
pub(super) fn rebuild(scene: &mut SceneCore) {
    for id in scene.boundaries.ids() {
        if !scene.physics.remove(id) {
            log::warn!("boundary {id:?} was already gone from the world");
        }
    }

    scene.boundaries = add_set(
        &mut scene.physics,
        &scene.geometry,
        scene.layout,
        scene.pressing_x,
        &scene.settings,
    );
    log::debug!("boundaries rebuilt ({:?} layout)", scene.layout);
}

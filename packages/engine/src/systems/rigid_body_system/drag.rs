use crate::rigid_body::Vec2;

use super::system::{BodyId, PhysicsWorld};

struct Grab {
    body: BodyId,
    /// Grab point relative to the body center at press time
    offset: Vec2,
}

/// Spring that pulls a grabbed dynamic body toward the pointer.
///
/// Each step the held body gets the velocity that closes `stiffness` of the
/// remaining gap in one step. Static bodies are never grabbed.
pub struct DragConstraint {
    stiffness: f32,
    pointer: Vec2,
    held: Option<Grab>,
}

impl DragConstraint {
    pub fn new(stiffness: f32) -> Self {
        Self {
            stiffness: stiffness.clamp(0.0, 1.0),
            pointer: Vec2::zero(),
            held: None,
        }
    }

    /// Pointer went down at `at`; grab whatever dynamic body is under it.
    pub fn press(&mut self, world: &PhysicsWorld, at: Vec2) -> Option<BodyId> {
        self.pointer = at;
        let body = world.dynamic_body_at(at)?;
        let center = world.position(body)?;
        self.held = Some(Grab {
            body,
            offset: at - center,
        });
        log::debug!("drag: grabbed {body:?}");
        Some(body)
    }

    pub fn move_to(&mut self, at: Vec2) {
        self.pointer = at;
    }

    pub fn release(&mut self) {
        if let Some(grab) = self.held.take() {
            log::debug!("drag: released {:?}", grab.body);
        }
    }

    pub fn held(&self) -> Option<BodyId> {
        self.held.as_ref().map(|g| g.body)
    }

    /// Apply the spring to the held body. Call once before every engine step.
    pub fn apply(&mut self, world: &mut PhysicsWorld) {
        let Some(grab) = self.held.as_ref() else {
            return;
        };
        let Some(center) = world.position(grab.body) else {
            // body left the world while held
            self.held = None;
            return;
        };
        let gap = self.pointer - (center + grab.offset);
        let velocity = gap * (self.stiffness / world.dt());
        world.set_velocity(grab.body, velocity);
    }
}

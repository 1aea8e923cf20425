use std::collections::HashMap;

use rapier2d::prelude::*;

use crate::rigid_body::{BodyKind, BodyShape, BodySpec, Vec2};

use super::collision::contains_point;

/// Handle of a body living in the physics world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyId(RigidBodyHandle);

/// Drawing data the engine does not track for us.
struct BodyLook {
    shape: BodyShape,
    fill: String,
}

/// Read-only snapshot of one body for rendering and assertions
#[derive(Clone, Copy, Debug)]
pub struct BodyView<'a> {
    pub id: BodyId,
    pub shape: BodyShape,
    pub fill: &'a str,
    pub pos: Vec2,
    pub angle: f32,
    pub dynamic: bool,
}

/// The rapier world plus the per-body fill/shape needed to draw it.
///
/// Coordinates are canvas pixels with y pointing down, so gravity is a
/// positive y acceleration.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    looks: HashMap<RigidBodyHandle, BodyLook>,
}

impl PhysicsWorld {
    /// `gravity` in px/s², stepped at `hz` with `pixels_per_meter` as the
    /// engine length unit.
    pub fn new(gravity: f32, hz: f32, pixels_per_meter: f32) -> Self {
        let mut params = IntegrationParameters::default();
        params.dt = 1.0 / hz;
        params.length_unit = pixels_per_meter;

        Self {
            gravity: vector![0.0, gravity],
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            looks: HashMap::new(),
        }
    }

    /// Fixed step length in seconds
    pub fn dt(&self) -> f32 {
        self.params.dt
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = vector![0.0, gravity];
    }

    /// Add a body built from `spec` and return its handle.
    pub fn add(&mut self, spec: &BodySpec) -> BodyId {
        let builder = match spec.kind {
            BodyKind::Fixed => RigidBodyBuilder::fixed(),
            BodyKind::Kinematic => RigidBodyBuilder::kinematic_position_based(),
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let handle = self
            .bodies
            .insert(builder.translation(vector![spec.pos.x, spec.pos.y]).build());

        let collider = match spec.shape {
            BodyShape::Circle { radius } => ColliderBuilder::ball(radius),
            BodyShape::Rect { width, height } => ColliderBuilder::cuboid(width / 2.0, height / 2.0),
        }
        .restitution(spec.restitution)
        .friction(spec.friction)
        .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        self.looks.insert(
            handle,
            BodyLook {
                shape: spec.shape,
                fill: spec.fill.clone(),
            },
        );
        BodyId(handle)
    }

    /// Remove a body and its collider. Returns false for unknown handles.
    pub fn remove(&mut self, id: BodyId) -> bool {
        self.looks.remove(&id.0);
        self.bodies
            .remove(
                id.0,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.get(id.0).is_some()
    }

    /// Jump a body to `pos` without sweeping through what lies between.
    pub fn teleport(&mut self, id: BodyId, pos: Vec2) {
        if let Some(body) = self.bodies.get_mut(id.0) {
            body.set_translation(vector![pos.x, pos.y], true);
        }
    }

    /// Ask a kinematic body to reach `pos` by the end of the next step,
    /// pushing dynamic bodies out of the way.
    pub fn glide(&mut self, id: BodyId, pos: Vec2) {
        if let Some(body) = self.bodies.get_mut(id.0) {
            body.set_next_kinematic_translation(vector![pos.x, pos.y]);
        }
    }

    pub fn set_velocity(&mut self, id: BodyId, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(id.0) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    pub fn position(&self, id: BodyId) -> Option<Vec2> {
        self.bodies.get(id.0).map(|b| {
            let t = b.translation();
            Vec2::new(t.x, t.y)
        })
    }

    pub fn velocity(&self, id: BodyId) -> Option<Vec2> {
        self.bodies.get(id.0).map(|b| {
            let v = b.linvel();
            Vec2::new(v.x, v.y)
        })
    }

    pub fn shape(&self, id: BodyId) -> Option<BodyShape> {
        self.looks.get(&id.0).map(|l| l.shape)
    }

    pub fn fill(&self, id: BodyId) -> Option<&str> {
        self.looks.get(&id.0).map(|l| l.fill.as_str())
    }

    pub fn is_dynamic(&self, id: BodyId) -> bool {
        self.bodies.get(id.0).is_some_and(|b| b.is_dynamic())
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dynamic_count(&self) -> usize {
        self.bodies.iter().filter(|(_, b)| b.is_dynamic()).count()
    }

    /// Fixed plus kinematic bodies
    pub fn static_count(&self) -> usize {
        self.body_count() - self.dynamic_count()
    }

    pub fn bodies(&self) -> impl Iterator<Item = BodyView<'_>> + '_ {
        self.bodies.iter().filter_map(move |(handle, body)| {
            let look = self.looks.get(&handle)?;
            let t = body.translation();
            Some(BodyView {
                id: BodyId(handle),
                shape: look.shape,
                fill: look.fill.as_str(),
                pos: Vec2::new(t.x, t.y),
                angle: body.rotation().angle(),
                dynamic: body.is_dynamic(),
            })
        })
    }

    /// Topmost dynamic body under `point`, if any.
    pub fn dynamic_body_at(&self, point: Vec2) -> Option<BodyId> {
        self.bodies()
            .filter(|v| v.dynamic && contains_point(&v.shape, v.pos, v.angle, point))
            .last()
            .map(|v| v.id)
    }

    /// Advance the engine by one fixed step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(1000.0, 60.0, 50.0)
    }

    #[test]
    fn add_and_remove_track_counts() {
        let mut w = world();
        let floor = w.add(&BodySpec::new_rect(100.0, 200.0, 400.0, 20.0).fixed());
        let ball = w.add(&BodySpec::new_circle(100.0, 50.0, 10.0).with_fill("#0000FF"));

        assert_eq!(w.body_count(), 2);
        assert_eq!(w.dynamic_count(), 1);
        assert_eq!(w.static_count(), 1);
        assert_eq!(w.fill(ball), Some("#0000FF"));
        assert_eq!(w.shape(ball), Some(BodyShape::Circle { radius: 10.0 }));

        assert!(w.remove(floor));
        assert!(!w.remove(floor));
        assert_eq!(w.body_count(), 1);
        assert!(w.fill(floor).is_none());
    }

    #[test]
    fn gravity_pulls_dynamic_bodies_down() {
        let mut w = world();
        let ball = w.add(&BodySpec::new_circle(0.0, 0.0, 5.0));
        for _ in 0..10 {
            w.step();
        }
        let pos = w.position(ball).unwrap();
        assert!(pos.y > 0.0);
        assert!(pos.x.abs() < 1e-3);
    }

    #[test]
    fn fixed_bodies_stay_put() {
        let mut w = world();
        let wall = w.add(&BodySpec::new_rect(10.0, 10.0, 5.0, 50.0).fixed());
        for _ in 0..10 {
            w.step();
        }
        assert_eq!(w.position(wall), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn floor_stops_a_falling_ball() {
        let mut w = world();
        w.add(&BodySpec::new_rect(0.0, 100.0, 400.0, 20.0).fixed());
        let ball = w.add(&BodySpec::new_circle(0.0, 50.0, 10.0));
        for _ in 0..240 {
            w.step();
        }
        let pos = w.position(ball).unwrap();
        // floor top is at y=90, ball radius 10
        assert!(pos.y < 90.0, "ball fell through: {pos:?}");
    }

    #[test]
    fn teleport_moves_kinematic_body_immediately() {
        let mut w = world();
        let piston = w.add(&BodySpec::new_rect(0.0, 0.0, 10.0, 10.0).kinematic());
        w.teleport(piston, Vec2::new(42.0, 0.0));
        assert_eq!(w.position(piston), Some(Vec2::new(42.0, 0.0)));
        assert!(!w.is_dynamic(piston));
    }

    #[test]
    fn glide_lands_after_one_step() {
        let mut w = world();
        let piston = w.add(&BodySpec::new_rect(0.0, 0.0, 10.0, 10.0).kinematic());
        w.glide(piston, Vec2::new(3.0, 0.0));
        w.step();
        let pos = w.position(piston).unwrap();
        assert!((pos.x - 3.0).abs() < 1e-4);
    }

    #[test]
    fn hit_test_ignores_static_bodies() {
        let mut w = world();
        w.add(&BodySpec::new_rect(0.0, 0.0, 100.0, 100.0).fixed());
        assert!(w.dynamic_body_at(Vec2::zero()).is_none());

        let ball = w.add(&BodySpec::new_circle(0.0, 0.0, 10.0));
        assert_eq!(w.dynamic_body_at(Vec2::new(3.0, 3.0)), Some(ball));
        assert!(w.dynamic_body_at(Vec2::new(30.0, 0.0)).is_none());
    }
}

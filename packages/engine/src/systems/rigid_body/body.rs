use super::vec2::Vec2;

/// Collision and drawing shape, centered on the body position
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl BodyShape {
    /// (half_width, half_height) of the unrotated shape
    pub fn half_extents(&self) -> (f32, f32) {
        match *self {
            BodyShape::Circle { radius } => (radius, radius),
            BodyShape::Rect { width, height } => (width / 2.0, height / 2.0),
        }
    }

    /// Point test in body-local coordinates (center at 0,0, no rotation).
    pub fn contains_local(&self, p: Vec2) -> bool {
        match *self {
            BodyShape::Circle { radius } => p.length() <= radius,
            BodyShape::Rect { width, height } => {
                p.x.abs() <= width / 2.0 && p.y.abs() <= height / 2.0
            }
        }
    }
}

/// How the engine integrates a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Never moves.
    Fixed,
    /// Moved only by the scene (position-driven), pushes dynamic bodies.
    Kinematic,
    /// Gravity, contacts and pointer drag.
    Dynamic,
}

/// Everything needed to create one rigid body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySpec {
    /// Center position
    pub pos: Vec2,
    pub shape: BodyShape,
    pub kind: BodyKind,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
    pub friction: f32,
    /// CSS fill color
    pub fill: String,
}

impl BodySpec {
    /// Create a dynamic rectangle centered at (x, y)
    pub fn new_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(x, y, BodyShape::Rect { width: w, height: h })
    }

    /// Create a dynamic circle centered at (x, y)
    pub fn new_circle(x: f32, y: f32, radius: f32) -> Self {
        Self::new(x, y, BodyShape::Circle { radius })
    }

    fn new(x: f32, y: f32, shape: BodyShape) -> Self {
        Self {
            pos: Vec2::new(x, y),
            shape,
            kind: BodyKind::Dynamic,
            restitution: 0.0,
            friction: 0.1,
            fill: "#888888".to_string(),
        }
    }

    pub fn fixed(mut self) -> Self {
        self.kind = BodyKind::Fixed;
        self
    }

    pub fn kinematic(mut self) -> Self {
        self.kind = BodyKind::Kinematic;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_material(mut self, restitution: f32, friction: f32) -> Self {
        self.set_restitution(restitution);
        self.set_friction(friction);
        self
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    pub fn set_friction(&mut self, f: f32) {
        self.friction = f.max(0.0);
    }
}

//! Body descriptors handed to the physics engine
//!
//! A `BodySpec` says where a body starts, what shape it has, how it moves
//! (fixed, kinematic or dynamic) and how it is filled on screen. The engine
//! owns the body once the spec is added to the world.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{BodyKind, BodyShape, BodySpec};

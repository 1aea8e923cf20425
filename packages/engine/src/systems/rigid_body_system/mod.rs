//! RigidBodySystem - the physics engine seam
//!
//! rapier2d does the integration, contacts and restitution. This module only
//! adapts it to canvas pixels, remembers how each body is drawn, and adds the
//! pointer drag constraint the page uses to throw bodies around.

mod collision;
mod drag;
mod system;

pub use drag::DragConstraint;
pub use system::{BodyId, BodyView, PhysicsWorld};

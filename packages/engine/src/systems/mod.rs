//! Systems - body descriptors and the physics engine adapter

pub mod rigid_body;
pub mod rigid_body_system;

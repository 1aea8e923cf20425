//! Domain - box geometry, settings and user input rules

pub mod geometry;
pub mod input;
pub mod settings;

use std::fmt;

use crate::core::SceneError;
use crate::domain::geometry::BoxGeometry;

/// Shape of a body dropped in by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    /// Horizontal half-extent of a body of this shape.
    ///
    /// `size` is a radius for circles and a side length for rectangles.
    pub fn half_extent(self, size: f32) -> f32 {
        match self {
            ShapeKind::Circle => size,
            ShapeKind::Rectangle => size / 2.0,
        }
    }

    /// Largest size that still fits across the box.
    pub fn max_size(self, geometry: &BoxGeometry) -> u32 {
        let limit = match self {
            ShapeKind::Circle => geometry.box_width / 2.0,
            ShapeKind::Rectangle => geometry.box_width,
        };
        limit.floor().max(0.0) as u32
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => f.write_str("circle"),
            ShapeKind::Rectangle => f.write_str("rectangle"),
        }
    }
}

/// A validated spawn size in pixels: positive and small enough to fit the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnSize(u32);

impl SpawnSize {
    pub fn parse(raw: &str, shape: ShapeKind, geometry: &BoxGeometry) -> Result<Self, SceneError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| SceneError::InvalidSize(trimmed.to_string()))?;

        let max = shape.max_size(geometry);
        if value < 1 || value > max as i64 {
            return Err(SceneError::SizeOutOfRange { size: value, max });
        }
        Ok(SpawnSize(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// A CSS hex fill color, kept exactly as the user typed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FillColor(String);

impl FillColor {
    pub fn parse(raw: &str) -> Result<Self, SceneError> {
        let valid = match raw.strip_prefix('#') {
            Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => false,
        };
        if !valid {
            return Err(SceneError::InvalidColor(raw.to_string()));
        }
        Ok(FillColor(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

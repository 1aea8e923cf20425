use crate::rigid_body::{BodyShape, Vec2};

/// Does a shape centered at `center` and rotated by `angle` cover `point`?
pub(super) fn contains_point(shape: &BodyShape, center: Vec2, angle: f32, point: Vec2) -> bool {
    // Undo the body rotation so the test runs against the axis-aligned shape.
    let local = (point - center).rotated(-angle);
    shape.contains_local(local)
}

/// The box the pressing wall sweeps through, in canvas pixels.
///
/// Computed once from the viewport at load time. A later resize rebuilds the
/// boundary bodies from these same numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    pub box_width: f32,
    pub box_height: f32,
    /// Left edge of the box interior
    pub box_x: f32,
    /// Top edge of the box interior
    pub box_y: f32,
    /// Wall thickness
    pub thickness: f32,
}

impl BoxGeometry {
    /// Center a `box_width` x `box_height` box in the viewport.
    pub fn centered(
        viewport_width: f32,
        viewport_height: f32,
        box_width: f32,
        box_height: f32,
        thickness: f32,
    ) -> Self {
        Self {
            box_width,
            box_height,
            box_x: (viewport_width - box_width) / 2.0,
            box_y: (viewport_height - box_height) / 2.0,
            thickness,
        }
    }

    pub fn right(&self) -> f32 {
        self.box_x + self.box_width
    }

    pub fn bottom(&self) -> f32 {
        self.box_y + self.box_height
    }

    /// Past this x the pressing wall snaps back.
    pub fn wrap_limit(&self) -> f32 {
        self.right() + self.thickness
    }

    /// Where the pressing wall lands after a wrap.
    pub fn wrap_reset(&self) -> f32 {
        self.box_x - self.thickness / 2.0
    }

    /// Allowed spawn center range for a body with horizontal half-extent `half`.
    pub fn spawn_x_range(&self, half: f32) -> (f32, f32) {
        (self.box_x + half, self.right() - half)
    }
}

use serde::Deserialize;

use crate::core::SceneError;
use crate::domain::input::FillColor;

/// Which set of boundary dimensions to build, both at load and on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryLayout {
    /// Taller right wall, wide ground shelf, offset pressing wall.
    #[default]
    Classic,
    /// Every wall sized exactly to the box; pressing wall parked on the right wall.
    Symmetric,
}

/// Page element ids the browser bridge looks up at mount.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub canvas: String,
    pub size: String,
    pub color_picker: String,
    pub add_circle: String,
    pub add_rectangle: String,
    pub start_button: String,
    pub pause_button: String,
    pub timer: String,
    /// Optional; rejected input is reported here when present.
    pub status: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "world".to_string(),
            size: "size".to_string(),
            color_picker: "colorPicker".to_string(),
            add_circle: "addCircle".to_string(),
            add_rectangle: "addRectangle".to_string(),
            start_button: "startButton".to_string(),
            pause_button: "pauseButton".to_string(),
            timer: "timer".to_string(),
            status: "status".to_string(),
        }
    }
}

/// Scene configuration. Every field has a default, so `{}` is a valid bundle
/// and callers only spell out what they change.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub box_width: f32,
    pub box_height: f32,
    pub thickness: f32,

    /// Pixels the pressing wall moves per oscillation tick
    pub wall_step: f32,
    pub wall_ticks_per_second: f64,
    pub timer_ticks_per_second: f64,

    pub restitution: f32,
    pub friction: f32,

    /// Downward acceleration in px/s²
    pub gravity: f32,
    pub physics_hz: f32,
    pub pixels_per_meter: f32,
    pub drag_stiffness: f32,

    pub background: String,
    pub wall_color: String,
    pub pressing_wall_color: String,
    pub boundary_layout: BoundaryLayout,

    /// Fill colors picked at random when the page has no color input.
    pub palette: Vec<String>,
    pub rng_seed: Option<u32>,

    pub elements: ElementIds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            box_width: 500.0,
            box_height: 300.0,
            thickness: 25.0,
            wall_step: 1.0,
            wall_ticks_per_second: 60.0,
            timer_ticks_per_second: 10.0,
            restitution: 0.8,
            friction: 0.05,
            gravity: 1000.0,
            physics_hz: 60.0,
            pixels_per_meter: 50.0,
            drag_stiffness: 0.2,
            background: "#f0f0f0".to_string(),
            wall_color: "#4b4b5c".to_string(),
            pressing_wall_color: "#FF0000".to_string(),
            boundary_layout: BoundaryLayout::Classic,
            palette: vec!["#0000FF".to_string(), "#FFA500".to_string()],
            rng_seed: None,
            elements: ElementIds::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        let positive = [
            ("boxWidth", self.box_width as f64),
            ("boxHeight", self.box_height as f64),
            ("thickness", self.thickness as f64),
            ("wallStep", self.wall_step as f64),
            ("wallTicksPerSecond", self.wall_ticks_per_second),
            ("timerTicksPerSecond", self.timer_ticks_per_second),
            ("physicsHz", self.physics_hz as f64),
            ("pixelsPerMeter", self.pixels_per_meter as f64),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SceneError::Settings(format!("{name} must be positive, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(SceneError::Settings(format!(
                "restitution must be within 0..=1, got {}",
                self.restitution
            )));
        }
        if self.friction < 0.0 || !self.friction.is_finite() {
            return Err(SceneError::Settings(format!(
                "friction must be non-negative, got {}",
                self.friction
            )));
        }
        if !(0.0..=1.0).contains(&self.drag_stiffness) {
            return Err(SceneError::Settings(format!(
                "dragStiffness must be within 0..=1, got {}",
                self.drag_stiffness
            )));
        }

        if self.palette.is_empty() {
            return Err(SceneError::Settings("palette must list at least one color".to_string()));
        }
        for color in self
            .palette
            .iter()
            .chain([&self.background, &self.wall_color, &self.pressing_wall_color])
        {
            FillColor::parse(color)?;
        }

        Ok(())
    }

    /// Oscillation tick period in milliseconds.
    pub fn wall_period_ms(&self) -> f64 {
        1000.0 / self.wall_ticks_per_second
    }

    /// Timer tick period in milliseconds.
    pub fn timer_period_ms(&self) -> f64 {
        1000.0 / self.timer_ticks_per_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let s = Settings::from_json("{}").expect("defaults should validate");
        assert_eq!(s, Settings::default());
        assert_eq!(s.boundary_layout, BoundaryLayout::Classic);
        assert_eq!(s.elements.color_picker, "colorPicker");
    }

    #[test]
    fn camel_case_fields_override_defaults() {
        let json = r##"{
            "boxWidth": 640,
            "wallTicksPerSecond": 30,
            "boundaryLayout": "symmetric",
            "palette": ["#123456"],
            "elements": { "timer": "clock" }
        }"##;
        let s = Settings::from_json(json).unwrap();
        assert_eq!(s.box_width, 640.0);
        assert_eq!(s.wall_ticks_per_second, 30.0);
        assert_eq!(s.boundary_layout, BoundaryLayout::Symmetric);
        assert_eq!(s.palette, vec!["#123456".to_string()]);
        assert_eq!(s.elements.timer, "clock");
        // untouched ids keep their defaults
        assert_eq!(s.elements.size, "size");
    }

    #[test]
    fn periods_follow_tick_rates() {
        let s = Settings::default();
        assert!((s.wall_period_ms() - 1000.0 / 60.0).abs() < 1e-9);
        assert_eq!(s.timer_period_ms(), 100.0);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = Settings::from_json(r#"{"boxWidth": 0}"#).unwrap_err();
        assert!(matches!(err, SceneError::Settings(_)));
    }

    #[test]
    fn rejects_bad_palette_colors() {
        let err = Settings::from_json(r#"{"palette": ["blue"]}"#).unwrap_err();
        assert!(matches!(err, SceneError::InvalidColor(_)));

        let err = Settings::from_json(r#"{"palette": []}"#).unwrap_err();
        assert!(matches!(err, SceneError::Settings(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::SettingsJson(_)));
    }
}

//! Viewport configuration and partial-override merging.

use serde::Deserialize;

/// Class names for the four movement directions.
///
/// Carried for the hosting page's styling; the engine never applies them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DirectionClasses {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl DirectionClasses {
    fn with_prefix(prefix: &str) -> Self {
        Self {
            up: format!("{prefix}-up"),
            down: format!("{prefix}-down"),
            left: format!("{prefix}-left"),
            right: format!("{prefix}-right"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Keep the view sliding with decaying velocity after release.
    pub decelerate: bool,
    /// Force a compositing layer on the hosting element.
    pub trigger_hardware: bool,
    /// Pixels a drag must travel before the view starts moving.
    pub threshold: f64,
    /// Allow horizontal movement.
    pub x: bool,
    /// Allow vertical movement.
    pub y: bool,
    /// Fraction of velocity kept per frame while decelerating, in (0, 1).
    pub slowdown: f64,
    /// Velocity cap per axis, pixels per frame.
    pub max_velocity: f64,
    /// Pointer-move sampling limit in Hz.
    pub frame_rate_limit: f64,
    /// Swap drag direction.
    pub invert: bool,
    pub max_zoom_step: i32,
    pub moving_class: DirectionClasses,
    pub decelerating_class: DirectionClasses,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decelerate: true,
            trigger_hardware: false,
            threshold: 0.0,
            x: true,
            y: true,
            slowdown: 0.9,
            max_velocity: 40.0,
            frame_rate_limit: 60.0,
            invert: false,
            max_zoom_step: 15,
            moving_class: DirectionClasses::with_prefix("kinetic--moving"),
            decelerating_class: DirectionClasses::with_prefix("kinetic--decelerating"),
        }
    }
}

impl Settings {
    /// Minimum milliseconds between two accepted pointer-move samples.
    pub fn sample_interval_ms(&self) -> f64 {
        1000.0 / self.frame_rate_limit
    }
}

/// Caller-supplied overrides. Missing fields fall back to [`Settings::default`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSettings {
    pub decelerate: Option<bool>,
    pub trigger_hardware: Option<bool>,
    pub threshold: Option<f64>,
    pub x: Option<bool>,
    pub y: Option<bool>,
    pub slowdown: Option<f64>,
    #[serde(alias = "maxvelocity")]
    pub max_velocity: Option<f64>,
    #[serde(alias = "throttleFPS")]
    pub frame_rate_limit: Option<f64>,
    pub invert: Option<bool>,
    pub max_zoom_step: Option<i32>,
    pub moving_class: Option<DirectionClasses>,
    pub decelerating_class: Option<DirectionClasses>,
}

impl PartialSettings {
    /// Parse a JSON object of overrides. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Overlay these overrides on the defaults.
    pub fn resolve(self) -> Settings {
        self.merge_over(Settings::default())
    }

    pub fn merge_over(self, base: Settings) -> Settings {
        Settings {
            decelerate: self.decelerate.unwrap_or(base.decelerate),
            trigger_hardware: self.trigger_hardware.unwrap_or(base.trigger_hardware),
            threshold: self.threshold.unwrap_or(base.threshold),
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            slowdown: self.slowdown.unwrap_or(base.slowdown),
            max_velocity: self.max_velocity.unwrap_or(base.max_velocity),
            frame_rate_limit: self.frame_rate_limit.unwrap_or(base.frame_rate_limit),
            invert: self.invert.unwrap_or(base.invert),
            max_zoom_step: self.max_zoom_step.unwrap_or(base.max_zoom_step),
            moving_class: self.moving_class.unwrap_or(base.moving_class),
            decelerating_class: self.decelerating_class.unwrap_or(base.decelerating_class),
        }
    }
}

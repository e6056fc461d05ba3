//! Pure math helpers shared by the input, motion and zoom paths.
//!
//! Nothing here holds state. Coordinates are CSS pixels as `f64`.

use std::ops::{Add, Sub};

/// Base of the geometric zoom sequence: step `n` scales content by `1.1^n`.
pub const ZOOM_MULTIPLIER: f64 = 1.1;

/// Pixels of change in pinch finger distance per discrete zoom step.
pub const TOUCH_DISTANCE_TO_ZOOM: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width/height pair (client size, scroll size, natural content size).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// One element in an offset-parent chain: its offset inside its offset parent
/// and its own scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetFrame {
    pub offset_left: f64,
    pub offset_top: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

/// Convert a client (viewport) coordinate into a coordinate relative to the
/// first element of `chain`, walking up through its offset parents.
///
/// Frames with non-finite offsets stop the walk, same as a detached element.
pub fn offset_in<I>(client: Point, chain: I) -> Point
where
    I: IntoIterator<Item = OffsetFrame>,
{
    let mut origin = Point::ZERO;
    for frame in chain {
        if !frame.offset_left.is_finite() || !frame.offset_top.is_finite() {
            break;
        }
        origin.x += frame.offset_left - frame.scroll_left;
        origin.y += frame.offset_top - frame.scroll_top;
    }
    client - origin
}

/// Clamp a velocity component to `[-max, max]`, keeping its sign.
pub fn cap_velocity(velocity: f64, max: f64) -> f64 {
    if velocity > max {
        max
    } else if velocity < -max {
        -max
    } else {
        velocity
    }
}

/// One friction step. Velocities whose magnitude floors to zero snap to 0 so
/// the loop terminates instead of approaching zero forever.
pub fn decelerate_velocity(velocity: f64, slowdown: f64) -> f64 {
    if velocity.abs().floor() == 0.0 {
        0.0
    } else {
        velocity * slowdown
    }
}

/// Scale multiplier for an integer zoom step.
pub fn zoom_multiplier(step: i32) -> f64 {
    if step > 0 {
        ZOOM_MULTIPLIER.powi(step)
    } else {
        1.0 / ZOOM_MULTIPLIER.powi(step.saturating_neg())
    }
}

/// Nearest integer zoom step for a multiplier (inverse of [`zoom_multiplier`]).
///
/// Saturates to `±i32::MAX` for zero or infinite multipliers.
pub fn zoom_step(multiplier: f64) -> i32 {
    let step = if multiplier < 1.0 {
        -((1.0 / multiplier).ln() / ZOOM_MULTIPLIER.ln()).round()
    } else {
        (multiplier.ln() / ZOOM_MULTIPLIER.ln()).round()
    };
    if step.is_nan() {
        return 0;
    }
    step.clamp(-(i32::MAX as f64), i32::MAX as f64) as i32
}

/// Signed pinch tick delta between two finger distances, both measured from
/// the gesture's initial distance. Positive means fingers spread (zoom in).
pub fn pinch_ticks(initial: f64, last: f64, current: f64) -> i32 {
    let prev = ((last - initial) / TOUCH_DISTANCE_TO_ZOOM).floor();
    let curr = ((current - initial) / TOUCH_DISTANCE_TO_ZOOM).floor();
    (curr - prev) as i32
}

/// A coordinate given either in pixels or as a percentage of some extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    Pixels(f64),
    Percent(f64),
}

impl Anchor {
    /// Resolve against `extent` pixels.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Anchor::Pixels(px) => px,
            Anchor::Percent(pct) => extent * (pct / 100.0),
        }
    }

    /// Parse `"25%"` or `"120"`. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Anchor> {
        let value = value.trim();
        match value.strip_suffix('%') {
            Some(pct) => pct.trim().parse().ok().map(Anchor::Percent),
            None => value.parse().ok().map(Anchor::Pixels),
        }
    }
}

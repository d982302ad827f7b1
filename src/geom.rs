use derive_more::{Add, Display, Sub};
use serde::{Deserialize, Serialize};

/// Screen-space point/vector. Only X and Y ever matter here; where a pivot
/// needs a depth component it is carried separately.
#[derive(Debug, Clone, Copy, PartialEq, Default, Add, Sub, Display)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Angle of this vector in degrees, measured via `atan2`.
    pub fn bearing_degrees(self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Plain linear interpolation; callers keep `t` in range.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

//! Point - pointer and layout coordinates in client (viewport) pixels

/// Position in client pixels, as reported by mouse events and `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of a client rect given as left, top, width, height
    pub fn rect_center(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: left + width / 2.0,
            y: top + height / 2.0,
        }
    }

    /// Angle in degrees of `other` as seen from `self`, in `(-180, 180]`.
    ///
    /// Screen y grows downward, so positive angles turn clockwise.
    pub fn angle_to(&self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }
}

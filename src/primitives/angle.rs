//! Angle - dial rotation arithmetic and CSS transform output
//!
//! Display rotation is kept unbounded so the knob keeps turning the same way
//! across interactions. Normalized values are only used for comparison.

/// Map any degree value into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    // -1e-14 + 360.0 rounds to 360.0
    if d >= 360.0 { 0.0 } else { d }
}

/// Signed delta in `(-180, 180]` such that `current + delta` lands on `target` modulo 360.
///
/// Non-finite input yields 0 so a broken measurement never spins the dial.
pub fn shortest_angle_delta(target: f64, current: f64) -> f64 {
    let mut diff = target - current;
    if !diff.is_finite() {
        return 0.0;
    }
    diff %= 360.0;
    while diff > 180.0 {
        diff -= 360.0;
    }
    while diff <= -180.0 {
        diff += 360.0;
    }
    diff
}

/// Unbounded dial rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Rotation(f64);

impl Rotation {
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn to_css(&self) -> String {
        format!("rotate({}deg)", self.0)
    }
}

#[cfg(test)]
pub(crate) fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

//! Rotary dial - discrete sections placed around a freely rotating knob
//!
//! Section `i` sits at anchor angle `i * 360 / N`. Every completed interaction
//! resolves to a [`Selection`]: the chosen index plus a rotation that lines the
//! knob's indicator up with that anchor, reached by the shortest path from the
//! rotation the knob already had.

pub mod gesture;
mod view;

pub use gesture::Gesture;
pub use view::RotaryDial;

use crate::error::DialError;
use crate::primitives::{normalize_angle, shortest_angle_delta};

/// Outcome of a finished drag or label click
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub rotation: f64,
}

/// Ordered, non-empty list of section labels
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    labels: Vec<String>,
}

impl Sections {
    pub fn new<I, S>(labels: I) -> Result<Self, DialError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(DialError::NoSections);
        }
        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().map(String::as_str).enumerate()
    }

    /// Degrees between neighbouring anchors. Never divides by zero: `new` rejects empty lists.
    pub fn angle_per_segment(&self) -> f64 {
        360.0 / self.labels.len() as f64
    }

    pub fn anchor(&self, index: usize) -> f64 {
        index as f64 * self.angle_per_segment()
    }

    /// Jump straight to `index` from the current (possibly accumulated) rotation.
    pub fn select(&self, index: usize, rotation: f64) -> Result<Selection, DialError> {
        if index >= self.len() {
            return Err(DialError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let delta = shortest_angle_delta(self.anchor(index), normalize_angle(rotation));
        Ok(Selection {
            index,
            rotation: rotation + delta,
        })
    }

    /// Settle a free rotation onto the nearest anchor.
    ///
    /// Ties keep the lowest index: the scan only replaces on a strictly smaller delta.
    pub fn snap(&self, raw_rotation: f64) -> Selection {
        let raw = if raw_rotation.is_finite() { raw_rotation } else { 0.0 };
        let normalized = normalize_angle(raw);

        let mut best = 0;
        let mut smallest = f64::INFINITY;
        for i in 0..self.len() {
            let d = shortest_angle_delta(self.anchor(i), normalized);
            if d.abs() < smallest.abs() {
                smallest = d;
                best = i;
            }
        }

        Selection {
            index: best,
            rotation: raw + smallest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::angle::approx;

    fn six() -> Sections {
        Sections::new(["Skills", "About", "Work", "Education", "Languages", "Projects"]).unwrap()
    }

    #[test]
    fn empty_sections_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(Sections::new(empty), Err(DialError::NoSections));
    }

    #[test]
    fn anchors_evenly_spaced() {
        let s = six();
        assert!(approx(s.angle_per_segment(), 60.0));
        assert!(approx(s.anchor(0), 0.0));
        assert!(approx(s.anchor(5), 300.0));
        assert_eq!(s.label(2), Some("Work"));
        assert_eq!(s.label(6), None);
    }

    #[test]
    fn single_section_dial() {
        let s = Sections::new(["Only"]).unwrap();
        assert!(approx(s.angle_per_segment(), 360.0));
        let sel = s.snap(170.0);
        assert_eq!(sel.index, 0);
        assert!(approx(sel.rotation, 0.0));
    }

    #[test]
    fn select_opposite_goes_positive_half_turn() {
        let sel = six().select(3, 0.0).unwrap();
        assert_eq!(sel.index, 3);
        assert!(approx(sel.rotation, 180.0));
    }

    #[test]
    fn select_wraps_forward_past_zero() {
        let sel = six().select(0, 350.0).unwrap();
        assert_eq!(sel.index, 0);
        assert!(approx(sel.rotation, 360.0));
        assert!(approx(normalize_angle(sel.rotation), 0.0));
    }

    #[test]
    fn select_from_rest_stays_within_half_turn() {
        let s = six();
        for i in 0..s.len() {
            let sel = s.select(i, 0.0).unwrap();
            assert!(sel.rotation.abs() <= 180.0);
            assert!(approx(normalize_angle(sel.rotation), normalize_angle(s.anchor(i))));
        }
    }

    #[test]
    fn repeated_select_is_stable() {
        let s = six();
        let mut rotation = 1234.5;
        let first = s.select(4, rotation).unwrap();
        rotation = first.rotation;
        for _ in 0..5 {
            let again = s.select(4, rotation).unwrap();
            assert_eq!(again.index, 4);
            assert!(approx(normalize_angle(again.rotation), normalize_angle(first.rotation)));
            rotation = again.rotation;
        }
    }

    #[test]
    fn select_out_of_range() {
        assert_eq!(
            six().select(6, 0.0),
            Err(DialError::IndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn snap_picks_nearest_anchor() {
        let sel = six().snap(100.0);
        assert_eq!(sel.index, 2);
        assert!(approx(sel.rotation, 120.0));
    }

    #[test]
    fn snap_keeps_accumulated_turns() {
        let sel = six().snap(-370.0);
        assert_eq!(sel.index, 0);
        assert!(approx(sel.rotation, -360.0));
    }

    #[test]
    fn snap_tie_prefers_lower_index() {
        // 30 is equidistant from anchors 0 and 60
        let sel = six().snap(30.0);
        assert_eq!(sel.index, 0);
        assert!(approx(sel.rotation, 0.0));
    }

    #[test]
    fn snap_non_finite_rests_at_first_section() {
        let sel = six().snap(f64::NAN);
        assert_eq!(sel, Selection { index: 0, rotation: 0.0 });
    }
}

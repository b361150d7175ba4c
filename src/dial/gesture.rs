//! Drag gesture state machine
//!
//! `Idle` → `Dragging` on press, `Dragging` → `Idle` on release. The page-wide
//! capture layer that observes moves and releases is rendered only while the
//! machine is `Dragging`, so it is acquired on press and dropped on release.

use super::{Sections, Selection};
use crate::primitives::Point;

/// Snapshot taken when the pointer goes down on the dial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub center: Point,
    pub start_angle: f64,
    pub initial_rotation: f64,
    pub last_pointer: Point,
}

impl DragSession {
    fn new(center: Point, pointer: Point, rotation: f64) -> Self {
        Self {
            center,
            start_angle: center.angle_to(pointer),
            initial_rotation: rotation,
            last_pointer: pointer,
        }
    }

    /// Raw rotation for a pointer position.
    ///
    /// Not unwrapped: crossing the atan2 seam at ±180 jumps the result by 360.
    pub fn rotation_at(&self, pointer: Point) -> f64 {
        self.initial_rotation + (self.center.angle_to(pointer) - self.start_angle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Start a drag. A dial that could not be measured (`center == None`) or a
    /// drag already in progress leaves the machine untouched.
    pub fn press(&mut self, center: Option<Point>, pointer: Point, rotation: f64) -> bool {
        match (*self, center) {
            (Self::Idle, Some(center)) => {
                *self = Self::Dragging(DragSession::new(center, pointer, rotation));
                true
            }
            _ => false,
        }
    }

    /// Live rotation while dragging; `None` when idle.
    pub fn motion(&mut self, pointer: Point) -> Option<f64> {
        match self {
            Self::Dragging(session) => {
                session.last_pointer = pointer;
                Some(session.rotation_at(pointer))
            }
            Self::Idle => None,
        }
    }

    /// Finish the drag and snap onto the nearest section. A release with no
    /// drag in progress yields nothing.
    pub fn release(&mut self, pointer: Point, sections: &Sections) -> Option<Selection> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(sections.snap(session.rotation_at(pointer))),
            Self::Idle => None,
        }
    }

    /// Finish the drag where the pointer was last seen, for when it leaves the page.
    pub fn release_at_last(&mut self, sections: &Sections) -> Option<Selection> {
        match *self {
            Self::Dragging(session) => self.release(session.last_pointer, sections),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::angle::approx;

    const CENTER: Point = Point::new(200.0, 200.0);

    fn six() -> Sections {
        Sections::new(["a", "b", "c", "d", "e", "f"]).unwrap()
    }

    /// Pointer on a circle around `CENTER` at `deg` (clockwise from +x).
    fn at(deg: f64) -> Point {
        let r = deg.to_radians();
        Point::new(CENTER.x + 100.0 * r.cos(), CENTER.y + 100.0 * r.sin())
    }

    #[test]
    fn press_without_measurement_is_noop() {
        let mut g = Gesture::default();
        assert!(!g.press(None, at(0.0), 0.0));
        assert_eq!(g, Gesture::Idle);
        assert_eq!(g.motion(at(40.0)), None);
    }

    #[test]
    fn press_while_dragging_is_ignored() {
        let mut g = Gesture::default();
        assert!(g.press(Some(CENTER), at(0.0), 0.0));
        let before = g;
        assert!(!g.press(Some(CENTER), at(90.0), 500.0));
        assert_eq!(g, before);
    }

    #[test]
    fn motion_follows_pointer_continuously() {
        let mut g = Gesture::default();
        g.press(Some(CENTER), at(10.0), 300.0);
        let r = g.motion(at(55.0)).unwrap();
        assert!((r - 345.0).abs() < 1e-6);
        // no snapping during the drag
        let r = g.motion(at(47.0)).unwrap();
        assert!((r - 337.0).abs() < 1e-6);
    }

    #[test]
    fn release_snaps_to_nearest_anchor() {
        let mut g = Gesture::default();
        g.press(Some(CENTER), at(0.0), 0.0);
        let sel = g.release(at(100.0), &six()).unwrap();
        assert_eq!(sel.index, 2);
        assert!((sel.rotation - 120.0).abs() < 1e-6);
        assert!(!g.is_dragging());
    }

    #[test]
    fn release_keeps_initial_rotation_base() {
        let mut g = Gesture::default();
        g.press(Some(CENTER), at(0.0), 720.0);
        let sel = g.release(at(-50.0), &six()).unwrap();
        assert_eq!(sel.index, 5);
        assert!((sel.rotation - 660.0).abs() < 1e-6);
    }

    #[test]
    fn quick_click_release_returns_to_idle() {
        // press and release with no motion, before any capture layer exists
        let s = six();
        let mut g = Gesture::default();
        assert!(g.press(Some(CENTER), at(30.0), 120.0));
        let sel = g.release(at(30.0), &s).unwrap();
        assert_eq!(sel.index, 2);
        assert!(approx(sel.rotation, 120.0));
        assert!(!g.is_dragging());
        assert_eq!(g.motion(at(80.0)), None);
        // the next press starts a fresh drag
        assert!(g.press(Some(CENTER), at(0.0), sel.rotation));
    }

    #[test]
    fn stale_release_fires_nothing() {
        let s = six();
        let mut g = Gesture::default();
        g.press(Some(CENTER), at(0.0), 0.0);
        assert!(g.release(at(60.0), &s).is_some());
        assert_eq!(g.release(at(60.0), &s), None);
        assert_eq!(g.release_at_last(&s), None);
    }

    #[test]
    fn consecutive_drags_fire_once_each() {
        let s = six();
        let mut g = Gesture::default();
        let mut rotation = 0.0;
        let mut selections = Vec::new();
        let mut captures = 0;

        for (from, to) in [(0.0, 60.0), (0.0, 125.0)] {
            if g.press(Some(CENTER), at(from), rotation) {
                captures += 1;
            }
            if let Some(r) = g.motion(at(to)) {
                rotation = r;
            }
            // the capture layer sees the release, then a late duplicate
            for _ in 0..2 {
                if let Some(sel) = g.release(at(to), &s) {
                    rotation = sel.rotation;
                    selections.push(sel);
                }
            }
        }

        assert_eq!(captures, 2);
        assert_eq!(selections.len(), 2);
        assert_eq!(selections[0].index, 1);
        assert_eq!(selections[1].index, 3);
        assert!(approx(selections[1].rotation.round(), 180.0));
    }

    #[test]
    fn leaving_the_page_releases_at_last_pointer() {
        let mut g = Gesture::default();
        g.press(Some(CENTER), at(0.0), 0.0);
        g.motion(at(170.0));
        let sel = g.release_at_last(&six()).unwrap();
        assert_eq!(sel.index, 3);
        assert!(!g.is_dragging());
    }
}

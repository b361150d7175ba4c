//! Geometry primitives shared by the dial
//!
//! - `angle` → degree arithmetic and CSS rotation
//! - `position` → client-space points and pointer angles

pub mod angle;
pub mod position;

pub use angle::{Rotation, normalize_angle, shortest_angle_delta};
pub use position::Point;

//! 2D vector helpers, angle conventions and world-space rectangles for Liftoff.
//!
//! All world-space math uses [`glam::DVec2`]. The world frame matches the
//! screen: x grows to the right and y grows downward, so an angle of 90°
//! points "up" on screen. Helpers in [`polar`] hide the sign flips this
//! convention requires.

mod angle;
pub mod polar;
mod rect;

pub use angle::{angle_difference, normalize_degrees};
pub use glam::{DVec2, IVec2};
pub use polar::{from_polar, to_polar};
pub use rect::Rect;

/// Squared Euclidean distance between two world-space points.
pub fn distance_squared(a: DVec2, b: DVec2) -> f64 {
    (a - b).length_squared()
}

/// Euclidean distance between two world-space points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (a - b).length()
}

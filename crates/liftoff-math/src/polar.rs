//! Polar conversion in the screen frame.
//!
//! Angles are in degrees measured from +x. Because world y grows downward,
//! a positive angle here turns clockwise on screen; callers that think in
//! the usual counter-clockwise convention pass the negated angle (a nose
//! at 90° thrusts along `from_polar(a, -90.0)`, which is screen-up).

use glam::DVec2;

/// Build a vector of the given length pointing along `degrees`.
pub fn from_polar(length: f64, degrees: f64) -> DVec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    DVec2::new(length * cos, length * sin)
}

/// Length and angle (degrees in `(-180, 180]`) of a vector.
pub fn to_polar(v: DVec2) -> (f64, f64) {
    (v.length(), v.y.atan2(v.x).to_degrees())
}

/// Angle of `v` in degrees after flipping y, i.e. measured counter-clockwise
/// on screen. This is the frame used for angles relative to a body.
pub fn screen_angle(v: DVec2) -> f64 {
    (-v.y).atan2(v.x).to_degrees()
}

//! View-space projection for the Liftoff scene.
//!
//! A [`Camera`] maps world space (meters, y down) to screen pixels under a
//! zoom factor expressed in world units per pixel. While tethered the
//! driver keeps it centered on the vehicle; untethered it can be panned
//! and zoomed toward the cursor.

mod camera;
mod zoom;

pub use camera::Camera;
pub use zoom::{CameraError, ZoomDirection, ZoomSettings};

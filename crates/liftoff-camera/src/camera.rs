//! World/screen transform for the 2D view.

use glam::{DVec2, IVec2, UVec2};
use liftoff_math::{Rect, distance};
use tracing::debug;

use crate::zoom::{CameraError, ZoomDirection, ZoomSettings};

/// A 2D camera over world space.
///
/// `zoom` is world units per pixel, so a larger zoom shows more of the
/// world. World size and visibility radius are derived from screen size
/// and zoom and recomputed on every change; the fields are private so they
/// cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    top_left: DVec2,
    screen_size: UVec2,
    zoom: f64,
    settings: ZoomSettings,
    world_size: DVec2,
    radius: f64,
    tethered: bool,
}

impl Camera {
    /// A tethered camera. `zoom` is clamped into the settings' range.
    ///
    /// Fails if the settings do not validate or `zoom` is not a positive
    /// finite number.
    pub fn new(
        top_left: DVec2,
        screen_size: UVec2,
        zoom: f64,
        settings: ZoomSettings,
    ) -> Result<Self, CameraError> {
        settings.validate()?;
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(CameraError::InvalidZoom(zoom));
        }
        let mut camera = Self {
            top_left,
            screen_size,
            zoom: settings.clamp(zoom),
            settings,
            world_size: DVec2::ZERO,
            radius: 0.0,
            tethered: true,
        };
        camera.update_derived();
        Ok(camera)
    }

    /// Tethered camera at zoom 1 (or the nearest allowed zoom) with the
    /// viewport centered on `position`, top-left rounded to whole units.
    pub fn centered_on(
        position: DVec2,
        screen_size: UVec2,
        settings: ZoomSettings,
    ) -> Result<Self, CameraError> {
        let mut camera = Self::new(DVec2::ZERO, screen_size, 1.0, settings)?;
        camera.top_left = (position - camera.world_size * 0.5).round();
        Ok(camera)
    }

    fn update_derived(&mut self) {
        self.world_size = self.screen_size.as_dvec2() * self.zoom;
        self.radius = self.world_size.length() * 0.5;
    }

    // --- Transforms ---

    /// World point to pixel, flooring toward the top-left.
    pub fn world_to_screen(&self, point: DVec2) -> IVec2 {
        ((point - self.top_left) / self.zoom).floor().as_ivec2()
    }

    /// Pixel (possibly fractional) to world point.
    pub fn screen_to_world(&self, pixel: DVec2) -> DVec2 {
        pixel * self.zoom + self.top_left
    }

    /// Project a polyline such as the vehicle trail.
    pub fn project_polyline(&self, points: impl IntoIterator<Item = DVec2>) -> Vec<IVec2> {
        points.into_iter().map(|p| self.world_to_screen(p)).collect()
    }

    // --- Movement ---

    /// Move the view by a pixel delta. Refused while tethered.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        if self.tethered {
            return false;
        }
        self.top_left += DVec2::new(dx, dy) * self.zoom;
        true
    }

    /// One zoom step. When untethered the world point under `anchor`
    /// stays under it.
    pub fn zoom_at(&mut self, direction: ZoomDirection, anchor: DVec2) {
        let before = self.screen_to_world(anchor);
        self.zoom = self.settings.step(self.zoom, direction);
        self.update_derived();
        if !self.tethered {
            let after = self.screen_to_world(anchor);
            self.top_left += before - after;
        }
    }

    /// Center the viewport on `position` while tethered.
    pub fn follow(&mut self, position: DVec2) {
        if self.tethered {
            self.top_left = position - self.world_size * 0.5;
        }
    }

    /// Change the screen size. An untethered view keeps its center.
    pub fn resize(&mut self, screen_size: UVec2) {
        if !self.tethered {
            let delta = screen_size.as_dvec2() - self.screen_size.as_dvec2();
            self.top_left -= delta * 0.5 * self.zoom;
        }
        self.screen_size = screen_size;
        self.update_derived();
    }

    pub fn set_tether(&mut self, tethered: bool) {
        if self.tethered != tethered {
            debug!(tethered, "Camera tether changed");
        }
        self.tethered = tethered;
    }

    pub fn toggle_tether(&mut self) {
        self.set_tether(!self.tethered);
    }

    pub fn is_tethered(&self) -> bool {
        self.tethered
    }

    // --- Culling ---

    /// Bounding-circle test; may report off-screen circles near the corners.
    pub fn circle_visible(&self, center: DVec2, radius: f64) -> bool {
        distance(self.center(), center) <= self.radius + radius
    }

    /// Exact test for an axis-aligned rect given by center and full size.
    pub fn rect_visible(&self, center: DVec2, size: DVec2) -> bool {
        self.world_rect()
            .intersects(&Rect::from_center_size(center, size))
    }

    // --- Accessors ---

    pub fn top_left(&self) -> DVec2 {
        self.top_left
    }

    pub fn screen_size(&self) -> UVec2 {
        self.screen_size
    }

    pub fn world_size(&self) -> DVec2 {
        self.world_size
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_settings(&self) -> &ZoomSettings {
        &self.settings
    }

    /// Radius of the circle circumscribing the world-space viewport.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> DVec2 {
        self.top_left + self.world_size * 0.5
    }

    pub fn world_rect(&self) -> Rect {
        Rect::from_top_left(self.top_left, self.world_size)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world space.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
/// The constructors enforce this by sorting components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    /// Create a rectangle from two opposite corners.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_top_left(top_left: DVec2, size: DVec2) -> Self {
        Self::new(top_left, top_left + size)
    }

    /// Create a rectangle centered on `center` with the given full size.
    pub fn from_center_size(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns true if this rectangle overlaps `other` (touching edges count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

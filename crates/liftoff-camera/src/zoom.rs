use serde::{Deserialize, Serialize};

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Fewer world units per pixel.
    In,
    /// More world units per pixel.
    Out,
}

/// Zoom limits and per-step factors, in world units per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    pub min: f64,
    pub max: f64,
    /// Multiplier applied on [`ZoomDirection::In`] (< 1).
    pub in_factor: f64,
    /// Multiplier applied on [`ZoomDirection::Out`] (> 1).
    pub out_factor: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 500.0,
            in_factor: 0.9,
            out_factor: 1.1,
        }
    }
}

/// Rejected zoom settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("zoom range must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidZoomRange { min: f64, max: f64 },

    #[error("zoom {which} factor {value} must move zoom {which}")]
    InvalidZoomFactor { which: &'static str, value: f64 },

    #[error("zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),
}

impl ZoomSettings {
    pub fn validate(&self) -> Result<(), CameraError> {
        let range_ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max;
        if !range_ok {
            return Err(CameraError::InvalidZoomRange {
                min: self.min,
                max: self.max,
            });
        }
        if !(self.in_factor > 0.0 && self.in_factor < 1.0) {
            return Err(CameraError::InvalidZoomFactor {
                which: "in",
                value: self.in_factor,
            });
        }
        if !(self.out_factor > 1.0 && self.out_factor.is_finite()) {
            return Err(CameraError::InvalidZoomFactor {
                which: "out",
                value: self.out_factor,
            });
        }
        Ok(())
    }

    /// Never panics, even on settings that fail [`validate`](Self::validate).
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }

    /// Zoom after one step in `direction`, clamped to the range.
    pub fn step(&self, zoom: f64, direction: ZoomDirection) -> f64 {
        let factor = match direction {
            ZoomDirection::In => self.in_factor,
            ZoomDirection::Out => self.out_factor,
        };
        self.clamp(zoom * factor)
    }
}

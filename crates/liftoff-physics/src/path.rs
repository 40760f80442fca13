//! Recorded trajectory history.

use std::collections::VecDeque;

use glam::DVec2;
use serde::Serialize;

/// Append-only trail of world-space points, oldest first.
///
/// Unbounded unless a cap is set; with a cap, the oldest points are
/// dropped to make room.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    points: VecDeque<DVec2>,
    cap: Option<usize>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path that keeps at most `cap` points. A cap of zero records nothing.
    pub fn with_cap(cap: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(cap.min(4096)),
            cap: Some(cap),
        }
    }

    pub fn extend(&mut self, point: DVec2) {
        if let Some(cap) = self.cap {
            if cap == 0 {
                return;
            }
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    /// True once there are enough points to draw a polyline.
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}

//! Cushion segment geometry
//!
//! A cushion is an oriented line segment on the table boundary. Orientation
//! matters: the builder in [`super::table`] walks the boundary so that every
//! derived normal faces the play area.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An oriented cushion segment with its play-area-facing unit normal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cushion {
    pub start: Vec2,
    pub end: Vec2,
    /// Unit perpendicular of `end - start`, facing the balls
    pub normal: Vec2,
}

impl Cushion {
    /// Build a segment and derive its normal.
    ///
    /// Panics if `start == end`; a cushion with no extent has no normal.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        assert!(start != end, "degenerate cushion: start == end");
        let line = end - start;
        let normal = Vec2::new(line.y, -line.x).normalize();
        Self { start, end, normal }
    }

    /// Whether `point` lies strictly between the endpoints on either axis.
    ///
    /// A betweenness test, not a projection: one axis suffices, which keeps
    /// axis-parallel segments (no extent on the other axis) working.
    pub fn in_range(&self, point: Vec2) -> bool {
        strictly_between(point.y, self.start.y, self.end.y)
            || strictly_between(point.x, self.start.x, self.end.x)
    }

    /// Signed distance from `point` to the cushion's infinite line,
    /// positive on the play-area side
    #[inline]
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        (point - self.end).dot(self.normal)
    }
}

#[inline]
fn strictly_between(v: f32, a: f32, b: f32) -> bool {
    (v > a && v < b) || (v < a && v > b)
}

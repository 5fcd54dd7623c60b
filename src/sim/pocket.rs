//! Pocket capture zones
//!
//! Pockets sit at the junctions between cushion groups. Geometry is derived
//! once from the two junction vertices; the drop counter is the raw scoring
//! signal a collaborator consumes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circular capture zone at a cushion junction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pocket {
    pub center: Vec2,
    pub radius: f32,
    /// Balls dropped here since the last [`Pocket::take_dropped`]
    dropped: u32,
}

impl Pocket {
    /// Derive a pocket from the two cushion endpoints flanking its junction.
    ///
    /// The center is the midpoint of the span. A mid-table junction (span
    /// parallel to an axis) takes the fixed `pocket_radius`; a corner
    /// junction (diagonal span) takes half the span length.
    pub fn from_junction(v1: Vec2, v2: Vec2, pocket_radius: f32) -> Self {
        let radius = if v1.x == v2.x || v1.y == v2.y {
            pocket_radius
        } else {
            v1.distance(v2) / 2.0
        };
        Self {
            center: (v1 + v2) / 2.0,
            radius,
            dropped: 0,
        }
    }

    /// Record a captured ball
    pub(crate) fn record_drop(&mut self) {
        self.dropped += 1;
    }

    /// Balls dropped since the last call; clears the counter
    pub fn take_dropped(&mut self) -> u32 {
        std::mem::take(&mut self.dropped)
    }

    /// Drop counter without clearing it
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

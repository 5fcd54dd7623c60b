//! Ball state and motion
//!
//! A ball is a 2D point with radius and mass. Friction and integration live
//! here; the collision tests and responses that read this state are free
//! functions in [`super::collision`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A ball on the table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Stable identity; 0 is the cue ball
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub mass: f32,
    /// True once a pocket has captured this ball (never set on the cue ball)
    pub dropped: bool,
}

impl Ball {
    /// Create a ball at its rack position
    pub fn new(id: u32, radius: f32, mass: f32) -> Self {
        Self {
            id,
            pos: rack_position(id, radius),
            vel: Vec2::ZERO,
            radius,
            mass,
            dropped: false,
        }
    }

    /// Whether this is the re-spottable cue ball
    #[inline]
    pub fn is_cue(&self) -> bool {
        self.id == 0
    }

    /// Re-rack: back to the start position, stationary, back in play
    pub fn reset(&mut self) {
        self.pos = rack_position(self.id, self.radius);
        self.vel = Vec2::ZERO;
        self.dropped = false;
    }

    /// Set velocity directly (a cue strike)
    pub fn apply_impulse(&mut self, velocity: Vec2) {
        self.vel = velocity;
    }

    /// Decelerate along the direction of travel by `friction * gravity * dt`.
    ///
    /// When the decrement would exceed the current speed the velocity is
    /// zeroed instead, so friction can never reverse the direction of travel.
    pub fn apply_friction(&mut self, dt: f32, friction: f32, gravity: f32) {
        let speed = self.vel.length();
        if speed <= 0.0 {
            return;
        }
        let delta = self.vel / speed * (friction * gravity) * dt;
        if delta.length() > speed {
            self.vel = Vec2::ZERO;
        } else {
            self.vel -= delta;
        }
    }

    /// Per-tick motion: friction, then position integration, then stop snap
    pub fn update(&mut self, dt: f32, friction: f32, gravity: f32) {
        self.apply_friction(dt, friction, gravity);
        self.pos += self.vel * dt;
        if self.vel.length() < STOP_SPEED {
            self.vel = Vec2::ZERO;
        }
    }

    /// Pocket response: stop dead. The cue ball re-spots at the head spot;
    /// any other ball is out of play for the rest of the frame.
    pub fn drop_into_pocket(&mut self) {
        self.vel = Vec2::ZERO;
        if self.is_cue() {
            self.pos = HEAD_SPOT;
        } else {
            self.dropped = true;
        }
    }
}

/// Rack position for the ball with the given id.
///
/// Id 0 (the cue ball) sits at the head spot. Object balls fill a triangle
/// descending from the foot spot, one more ball per row, spaced `3 * radius`
/// laterally and `2.5 * radius` between rows.
pub fn rack_position(id: u32, radius: f32) -> Vec2 {
    if id == 0 {
        return HEAD_SPOT;
    }
    let sep = radius * 3.0;
    let row_sep = radius * 2.5;
    let mut row = 1u32;
    let mut row_index = id;
    while row_index > row {
        row_index -= row;
        row += 1;
    }
    Vec2::new(
        (row - 1) as f32 * sep / 2.0 - sep * (row - row_index) as f32,
        -row_sep * (row - 1) as f32,
    )
}

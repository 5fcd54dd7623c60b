//! Baize - a billiards table physics core
//!
//! Core modules:
//! - `sim`: Deterministic table simulation (ball motion, cushion and pocket
//!   collisions, procedural boundary geometry)
//! - `fireworks`: Transient particle bursts spawned at collision points
//!
//! Rendering, input, scoring rules, and the run loop are the host's concern:
//! the host calls [`sim::Table::update`] once per tick (passing its owned
//! [`fireworks::Fireworks`] instance), advances the effects with
//! [`fireworks::Fireworks::update`], and reads state back for drawing.

pub mod fireworks;
pub mod sim;

pub use fireworks::{Burst, Fireworks, Particle};
pub use sim::{Ball, Cushion, Pocket, Table, TableConfig};

/// Physical and table-layout constants
///
/// Defaults baked into [`sim::TableConfig::default`]; hosts with a different
/// table supply their own config instead. Lengths are meters, speeds m/s.
pub mod consts {
    use glam::Vec2;
    use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};

    /// Nominal simulation timestep (10 ms tick)
    pub const SIM_DT: f32 = 0.01;

    /// Table half-width
    pub const TABLE_HALF_WIDTH: f32 = 0.6;
    /// Table half-height
    pub const TABLE_HALF_HEIGHT: f32 = 1.2;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.05;
    pub const BALL_MASS: f32 = 0.1;
    /// Balls racked on the table, cue ball included
    pub const BALL_COUNT: usize = 7;
    /// Cue ball re-spot position at the head of the table
    pub const HEAD_SPOT: Vec2 = Vec2::new(0.0, 0.5);

    /// Rail thickness; the slanted cushion ends cross it toward the pockets
    pub const CUSHION_THICKNESS: f32 = BALL_RADIUS * 1.5;
    /// Capture radius of the mid-table pockets
    pub const POCKET_RADIUS: f32 = BALL_RADIUS * 1.4;
    /// Slant of the cushion ends at the corner pockets
    pub const CORNER_POCKET_ANGLE: f32 = FRAC_PI_3;
    /// Slant of the cushion ends at the middle pockets
    pub const MIDDLE_POCKET_ANGLE: f32 = FRAC_PI_4;

    /// Fraction of normal speed kept on a cushion bounce
    pub const RESTITUTION: f32 = 0.5;
    /// Rolling friction coefficient
    pub const FRICTION: f32 = 0.03;
    /// Gravitational acceleration (m/s^2)
    pub const GRAVITY: f32 = 9.8;
    /// Speeds below this snap to zero (kills numerical creep)
    pub const STOP_SPEED: f32 = 0.01;

    /// Firework burst size range
    pub const FIREWORK_MIN_PARTICLES: usize = 8;
    pub const FIREWORK_MAX_PARTICLES: usize = 24;
    /// Horizontal scatter speed of burst particles (+/- per axis)
    pub const FIREWORK_SPREAD_SPEED: f32 = 0.5;
    /// Upward launch speed range of burst particles
    pub const FIREWORK_RISE_MIN: f32 = 1.0;
    pub const FIREWORK_RISE_MAX: f32 = 2.5;
    /// Rendered radius of a burst particle
    pub const FIREWORK_PARTICLE_RADIUS: f32 = 0.008;
}

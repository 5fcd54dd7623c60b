//! Deterministic table simulation
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed phase order within a tick (cushions and pockets, ball pairs,
//!   integration)
//! - Stable iteration order (balls by id, pairs by (i, j))
//! - No randomness (bursts spawned during a tick draw from the seeded RNG
//!   owned by [`crate::fireworks::Fireworks`], never the other way around)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod cushion;
pub mod pocket;
pub mod table;

pub use ball::{Ball, rack_position};
pub use collision::{
    ball_contact_point, balls_colliding, bounce_off_cushion, cushion_contact_point,
    elastic_exchange, hits_cushion, pocket_captures, resolve_ball_collision,
};
pub use cushion::Cushion;
pub use pocket::Pocket;
pub use table::{Table, TableConfig};

//! The table: procedural boundary geometry and the per-tick step
//!
//! The boundary is a closed loop of eighteen cushion segments in six groups
//! of three, one group per side of a hexagonal approximation of the
//! rectangle. The straight run of each side turns across the rail toward a
//! pocket at both ends, and the six pockets sit in the junction gaps between
//! groups.

use glam::Vec2;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision;
use super::cushion::Cushion;
use super::pocket::Pocket;
use crate::consts::*;
use crate::fireworks::Fireworks;

/// Physical and layout parameters, fixed at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Half the playfield width
    pub half_width: f32,
    /// Half the playfield height
    pub half_height: f32,
    /// Rail thickness; the slanted cushion ends cross it toward the pockets
    pub cushion_thickness: f32,
    /// Capture radius of the mid-table pockets
    pub pocket_radius: f32,
    /// Slant angle of the cushion ends at the corner pockets
    pub corner_angle: f32,
    /// Slant angle of the cushion ends at the middle pockets
    pub middle_angle: f32,
    /// Balls racked at construction, cue ball included
    pub ball_count: usize,
    pub ball_radius: f32,
    pub ball_mass: f32,
    /// Fraction of normal speed kept on a cushion bounce
    pub restitution: f32,
    /// Rolling friction coefficient
    pub friction: f32,
    /// Gravitational acceleration
    pub gravity: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            half_width: TABLE_HALF_WIDTH,
            half_height: TABLE_HALF_HEIGHT,
            cushion_thickness: CUSHION_THICKNESS,
            pocket_radius: POCKET_RADIUS,
            corner_angle: CORNER_POCKET_ANGLE,
            middle_angle: MIDDLE_POCKET_ANGLE,
            ball_count: BALL_COUNT,
            ball_radius: BALL_RADIUS,
            ball_mass: BALL_MASS,
            restitution: RESTITUTION,
            friction: FRICTION,
            gravity: GRAVITY,
        }
    }
}

/// The billiards table: boundary geometry plus the racked balls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    config: TableConfig,
    /// Balls in id order; index == id
    pub balls: Vec<Ball>,
    cushions: Vec<Cushion>,
    pockets: Vec<Pocket>,
}

impl Table {
    /// Build the boundary from `config` and rack the balls
    pub fn new(config: TableConfig) -> Self {
        let (cushions, pockets) = build_boundary(&config);
        let balls: Vec<Ball> = (0..config.ball_count)
            .map(|i| Ball::new(i as u32, config.ball_radius, config.ball_mass))
            .collect();
        info!(
            "table built: {} cushions, {} pockets, {} balls",
            cushions.len(),
            pockets.len(),
            balls.len()
        );
        Self {
            config,
            balls,
            cushions,
            pockets,
        }
    }

    #[inline]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[inline]
    pub fn cushions(&self) -> &[Cushion] {
        &self.cushions
    }

    #[inline]
    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    /// Mutable pocket access, for the scoring collaborator's
    /// [`Pocket::take_dropped`]
    #[inline]
    pub fn pockets_mut(&mut self) -> &mut [Pocket] {
        &mut self.pockets
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Phase order is fixed and observable: cushion bounces and pocket
    /// captures per ball first, then ball-ball pairs in (i, j) order with
    /// immediate velocity writes, then integration. Every collision test
    /// sees this tick's pre-integration positions; pair responses compound
    /// within the tick by design, so replays are exact.
    ///
    /// Each resolved collision spawns a firework burst at the contact point
    /// on the passed-in effects instance.
    pub fn update(&mut self, dt: f32, fireworks: &mut Fireworks) {
        // Cushion bounces and pocket captures, ball by ball
        for ball in &mut self.balls {
            if ball.dropped {
                continue;
            }
            for cushion in &self.cushions {
                if collision::hits_cushion(ball, cushion) {
                    collision::bounce_off_cushion(ball, cushion, self.config.restitution);
                    fireworks.spawn(collision::cushion_contact_point(ball, cushion));
                    debug!("ball {} bounced off a cushion", ball.id);
                }
            }
            for pocket in &mut self.pockets {
                if ball.dropped {
                    break;
                }
                if collision::pocket_captures(ball, pocket) {
                    debug!("ball {} captured at {:?}", ball.id, pocket.center);
                    ball.drop_into_pocket();
                    if ball.dropped {
                        pocket.record_drop();
                    }
                }
            }
        }

        // Ball-ball pairs; responses land immediately so later pairs see them
        // within the same tick
        for i in 0..self.balls.len() {
            for j in (i + 1)..self.balls.len() {
                let (head, tail) = self.balls.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if a.dropped || b.dropped {
                    continue;
                }
                if collision::balls_colliding(a, b) {
                    collision::resolve_ball_collision(a, b);
                    fireworks.spawn(collision::ball_contact_point(a, b));
                    debug!("balls {} and {} collided", a.id, b.id);
                }
            }
        }

        // Integration last: friction, position, stop snap
        for ball in &mut self.balls {
            if !ball.dropped {
                ball.update(dt, self.config.friction, self.config.gravity);
            }
        }
    }

    /// True while any ball still has velocity on either axis; the host's
    /// "ready for the next shot" gate
    pub fn any_balls_moving(&self) -> bool {
        self.balls.iter().any(|b| b.vel.x != 0.0 || b.vel.y != 0.0)
    }

    /// Re-rack every ball for a new frame and clear the pocket counters
    pub fn rack(&mut self) {
        for ball in &mut self.balls {
            ball.reset();
        }
        for pocket in &mut self.pockets {
            pocket.take_dropped();
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

/// Generate the eighteen cushions and six pockets for `config`.
///
/// Six coordinate groups of four vertices each, three segments per group.
/// Endpoints walk the boundary clockwise so every derived normal faces the
/// play area. Pockets fill the junction gaps between groups, pocket 0
/// wrapping around from the final segment back to the first.
fn build_boundary(config: &TableConfig) -> (Vec<Cushion>, Vec<Pocket>) {
    let t = config.cushion_thickness;
    let cor = config.corner_angle.tan() * t;
    let mid = config.middle_angle.tan() * t;

    // Coordinate ladders shared by all groups: x walks from the corner slant
    // start to the outer rail, z from the middle pocket mouth out to the
    // rail at the table ends.
    let x = [
        config.half_width - cor,
        config.half_width,
        config.half_width + t,
    ];
    let z = [
        config.pocket_radius,
        config.pocket_radius + mid,
        config.half_height - cor,
        config.half_height,
        config.half_height + t,
    ];

    let groups: [[Vec2; 4]; 6] = [
        // top rail
        [
            Vec2::new(-x[1], z[4]),
            Vec2::new(-x[0], z[3]),
            Vec2::new(x[0], z[3]),
            Vec2::new(x[1], z[4]),
        ],
        // right rail, upper half
        [
            Vec2::new(x[2], z[3]),
            Vec2::new(x[1], z[2]),
            Vec2::new(x[1], z[1]),
            Vec2::new(x[2], z[0]),
        ],
        // right rail, lower half
        [
            Vec2::new(x[2], -z[0]),
            Vec2::new(x[1], -z[1]),
            Vec2::new(x[1], -z[2]),
            Vec2::new(x[2], -z[3]),
        ],
        // bottom rail
        [
            Vec2::new(x[1], -z[4]),
            Vec2::new(x[0], -z[3]),
            Vec2::new(-x[0], -z[3]),
            Vec2::new(-x[1], -z[4]),
        ],
        // left rail, lower half
        [
            Vec2::new(-x[2], -z[3]),
            Vec2::new(-x[1], -z[2]),
            Vec2::new(-x[1], -z[1]),
            Vec2::new(-x[2], -z[0]),
        ],
        // left rail, upper half
        [
            Vec2::new(-x[2], z[0]),
            Vec2::new(-x[1], z[1]),
            Vec2::new(-x[1], z[2]),
            Vec2::new(-x[2], z[3]),
        ],
    ];

    let mut cushions = Vec::with_capacity(groups.len() * 3);
    for group in &groups {
        for pair in group.windows(2) {
            cushions.push(Cushion::new(pair[0], pair[1]));
        }
    }

    let mut pockets = Vec::with_capacity(groups.len());
    for i in 0..groups.len() {
        let prev = if i == 0 { cushions.len() - 1 } else { i * 3 - 1 };
        pockets.push(Pocket::from_junction(
            cushions[prev].end,
            cushions[i * 3].start,
            config.pocket_radius,
        ));
    }

    (cushions, pockets)
}

//! Collision tests and responses
//!
//! The tricky part of the table: pure functions over balls, cushions, and
//! pockets. Tests look only at pre-step state; responses mutate velocities in
//! place and never positions, so resolution order never moves a ball
//! mid-tick. Overlapping balls are left to separate on their own - the
//! approach gate in [`balls_colliding`] keeps an overlapping pair from being
//! resolved twice.

use glam::Vec2;

use super::ball::Ball;
use super::cushion::Cushion;
use super::pocket::Pocket;

/// Whether `ball` is moving into `cushion` and touching it.
///
/// Three gates: the velocity must carry the ball into the cushion (negative
/// component along the normal), the center must lie within the segment's
/// extent, and the center must sit within one radius of the cushion line.
/// The last is a signed band, not a one-sided inequality, so the short
/// slanted segments by the pockets resolve on the correct side.
pub fn hits_cushion(ball: &Ball, cushion: &Cushion) -> bool {
    if ball.vel.dot(cushion.normal) >= 0.0 {
        return false;
    }
    if !cushion.in_range(ball.pos) {
        return false;
    }
    let dist = cushion.signed_distance(ball.pos);
    dist < ball.radius && dist > -ball.radius
}

/// Bounce `ball` off `cushion`: the normal component reverses scaled by
/// `restitution`, the tangential component passes through untouched.
pub fn bounce_off_cushion(ball: &mut Ball, cushion: &Cushion, restitution: f32) {
    let perp = cushion.normal * ball.vel.dot(cushion.normal);
    let parallel = ball.vel - perp;
    ball.vel = parallel - perp * restitution;
}

/// Where the ball touched the cushion: its center projected onto the
/// cushion's line. Seeds the firework burst only.
pub fn cushion_contact_point(ball: &Ball, cushion: &Cushion) -> Vec2 {
    let dir = (cushion.end - cushion.start).normalize();
    cushion.start + dir * (ball.pos - cushion.start).dot(dir)
}

/// Whether balls `a` and `b` are approaching each other and overlapping
pub fn balls_colliding(a: &Ball, b: &Ball) -> bool {
    let rel_pos = a.pos - b.pos;
    let rel_vel = a.vel - b.vel;
    if rel_vel.dot(rel_pos.normalize_or_zero()) >= 0.0 {
        return false;
    }
    rel_pos.length() <= a.radius + b.radius
}

/// 1D elastic collision between masses `m1` and `m2` moving at `u1` and `u2`
/// along the contact direction
#[inline]
pub fn elastic_exchange(u1: f32, u2: f32, m1: f32, m2: f32) -> (f32, f32) {
    let sum = m1 + m2;
    (
        (m1 - m2) / sum * u1 + 2.0 * m2 / sum * u2,
        (m2 - m1) / sum * u2 + 2.0 * m1 / sum * u1,
    )
}

/// Elastic response for two colliding balls.
///
/// Each velocity splits into a component along the contact direction (center
/// of `b` to center of `a`) and an orthogonal remainder. The along components
/// trade through [`elastic_exchange`]; the remainders pass through. Exact,
/// mass-weighted, and symmetric under relabeling. Positions are not
/// corrected, so an overlapping pair stays overlapped until the exchanged
/// velocities separate it.
pub fn resolve_ball_collision(a: &mut Ball, b: &mut Ball) {
    let dir = (a.pos - b.pos).normalize_or_zero();
    let u1 = a.vel.dot(dir);
    let u2 = b.vel.dot(dir);
    let parallel_a = a.vel - dir * u1;
    let parallel_b = b.vel - dir * u2;
    let (v1, v2) = elastic_exchange(u1, u2, a.mass, b.mass);
    a.vel = parallel_a + dir * v1;
    b.vel = parallel_b + dir * v2;
}

/// Where two balls touched: the midpoint of their centers. Seeds the
/// firework burst only.
#[inline]
pub fn ball_contact_point(a: &Ball, b: &Ball) -> Vec2 {
    (a.pos + b.pos) / 2.0
}

/// Whether the ball's center is inside the pocket's capture circle
#[inline]
pub fn pocket_captures(ball: &Ball, pocket: &Pocket) -> bool {
    ball.pos.distance(pocket.center) < pocket.radius
}

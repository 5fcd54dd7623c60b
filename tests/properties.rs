//! Property tests for the collision and motion invariants
//!
//! Randomized checks of the physical contracts: friction only ever removes
//! speed, collision responses conserve momentum and energy, and the
//! approach gates never fire on separating or receding bodies.

use glam::Vec2;
use proptest::prelude::*;

use baize::consts::*;
use baize::sim::{
    Ball, Cushion, balls_colliding, bounce_off_cushion, elastic_exchange, hits_cushion,
    resolve_ball_collision,
};

fn ball_at(pos: Vec2, vel: Vec2, mass: f32) -> Ball {
    let mut ball = Ball::new(1, BALL_RADIUS, mass);
    ball.pos = pos;
    ball.vel = vel;
    ball
}

proptest! {
    #[test]
    fn friction_never_increases_speed_or_reverses(
        vx in -3.0f32..3.0,
        vy in -3.0f32..3.0,
        dt in 0.001f32..0.05,
    ) {
        let mut ball = ball_at(Vec2::ZERO, Vec2::new(vx, vy), BALL_MASS);
        let before = ball.vel;
        ball.apply_friction(dt, FRICTION, GRAVITY);
        prop_assert!(ball.vel.length() <= before.length() + 1e-6);
        // Deceleration acts against travel, never past zero
        prop_assert!(ball.vel.dot(before) >= 0.0);
    }

    #[test]
    fn friction_stops_every_ball_exactly(
        vx in -4.0f32..4.0,
        vy in -4.0f32..4.0,
    ) {
        let mut ball = ball_at(Vec2::ZERO, Vec2::new(vx, vy), BALL_MASS);
        for _ in 0..5_000 {
            ball.update(SIM_DT, FRICTION, GRAVITY);
            if ball.vel == Vec2::ZERO {
                break;
            }
        }
        prop_assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn ball_collision_conserves_momentum_and_energy(
        theta in 0.0f32..std::f32::consts::TAU,
        gap in 0.02f32..0.0999,
        s1 in 0.2f32..3.0,
        closing in 0.01f32..3.0,
        t1 in -2.0f32..2.0,
        t2 in -2.0f32..2.0,
        m1 in 0.05f32..0.5,
        m2 in 0.05f32..0.5,
    ) {
        let dir = Vec2::new(theta.cos(), theta.sin());
        let perp = Vec2::new(-dir.y, dir.x);
        // b sits ahead of a along `dir`, with a closing in on it
        let mut a = ball_at(Vec2::ZERO, dir * s1 + perp * t1, m1);
        let mut b = ball_at(dir * gap, dir * (s1 - closing) + perp * t2, m2);
        prop_assert!(balls_colliding(&a, &b));

        let momentum = a.vel * a.mass + b.vel * b.mass;
        let energy = a.mass * a.vel.length_squared() + b.mass * b.vel.length_squared();
        resolve_ball_collision(&mut a, &mut b);
        let momentum_after = a.vel * a.mass + b.vel * b.mass;
        let energy_after = a.mass * a.vel.length_squared() + b.mass * b.vel.length_squared();

        prop_assert!((momentum_after - momentum).length() < 1e-4);
        prop_assert!((energy_after - energy).abs() < 1e-3);
    }

    #[test]
    fn cushion_bounce_scales_normal_and_keeps_tangent(
        vx in 0.01f32..3.0,
        vy in -3.0f32..3.0,
        restitution in 0.0f32..1.0,
    ) {
        let wall = Cushion::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0));
        let mut ball = ball_at(Vec2::new(0.96, 0.0), Vec2::new(vx, vy), BALL_MASS);
        prop_assert!(hits_cushion(&ball, &wall));
        bounce_off_cushion(&mut ball, &wall, restitution);
        prop_assert!((ball.vel.x + vx * restitution).abs() < 1e-6);
        prop_assert!((ball.vel.y - vy).abs() < 1e-6);
    }

    #[test]
    fn separating_balls_never_collide(
        theta in 0.0f32..std::f32::consts::TAU,
        gap in 0.001f32..0.099,
        s1 in 0.0f32..3.0,
        s2 in 0.0f32..3.0,
    ) {
        let dir = Vec2::new(theta.cos(), theta.sin());
        // Overlapping but moving apart; the approach gate must hold them off
        let a = ball_at(Vec2::ZERO, -dir * s1, BALL_MASS);
        let b = ball_at(dir * gap, dir * s2, BALL_MASS);
        prop_assert!(!balls_colliding(&a, &b));
    }

    #[test]
    fn receding_ball_never_hits_cushion(
        px in 0.9f32..1.0,
        py in -0.9f32..0.9,
        vx in -3.0f32..=0.0,
        vy in -3.0f32..3.0,
    ) {
        let wall = Cushion::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0));
        let ball = ball_at(Vec2::new(px, py), Vec2::new(vx, vy), BALL_MASS);
        prop_assert!(!hits_cushion(&ball, &wall));
    }

    #[test]
    fn equal_mass_exchange_swaps_components(
        u1 in -5.0f32..5.0,
        u2 in -5.0f32..5.0,
        mass in 0.05f32..0.5,
    ) {
        let (v1, v2) = elastic_exchange(u1, u2, mass, mass);
        prop_assert_eq!(v1, u2);
        prop_assert_eq!(v2, u1);
    }
}

//! Firework bursts spawned at collision points
//!
//! Purely cosmetic: the table spawns a burst wherever balls strike each other
//! or a cushion, and the host advances and draws the particles. Each burst is
//! a fountain of particles launched upward from the contact point; particles
//! fall under gravity and expire on reaching the table plane.
//!
//! The manager keeps retired bursts in place so their slots can be reused:
//! [`Fireworks::update`] skips spent bursts, and [`Fireworks::compact`]
//! rewinds the active cursor once every live burst has expired. Burst
//! randomness comes from an owned seeded generator, so effects replay
//! identically for a given seed and spawn sequence.

use glam::{Vec2, Vec3};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// One point of a burst
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    /// Cleared permanently once the particle lands
    pub visible: bool,
}

impl Particle {
    fn new(origin: Vec3, vel: Vec3) -> Self {
        Self {
            pos: origin,
            vel,
            radius: FIREWORK_PARTICLE_RADIUS,
            visible: true,
        }
    }

    /// Fall under gravity; expire on reaching the table plane
    fn update(&mut self, dt: f32, gravity: f32) {
        self.vel.y -= gravity * dt;
        self.pos += self.vel * dt;
        if self.pos.y <= 0.0 {
            self.visible = false;
        }
    }
}

/// One firework: a fountain of particles launched from a contact point
#[derive(Debug, Clone)]
pub struct Burst {
    particles: Vec<Particle>,
    visible: bool,
}

impl Burst {
    /// Launch a randomized fountain at `at` (a table-plane point, lifted to
    /// height zero)
    fn new(rng: &mut Pcg32, at: Vec2) -> Self {
        let origin = Vec3::new(at.x, 0.0, at.y);
        let count = rng.random_range(FIREWORK_MIN_PARTICLES..=FIREWORK_MAX_PARTICLES);
        let particles = (0..count)
            .map(|_| {
                let vel = Vec3::new(
                    rng.random_range(-FIREWORK_SPREAD_SPEED..=FIREWORK_SPREAD_SPEED),
                    rng.random_range(FIREWORK_RISE_MIN..=FIREWORK_RISE_MAX),
                    rng.random_range(-FIREWORK_SPREAD_SPEED..=FIREWORK_SPREAD_SPEED),
                );
                Particle::new(origin, vel)
            })
            .collect();
        Self {
            particles,
            visible: true,
        }
    }

    /// Advance live particles; release storage once the last one lands
    fn update(&mut self, dt: f32, gravity: f32) {
        if !self.visible {
            return;
        }
        let mut any_visible = false;
        for particle in &mut self.particles {
            if !particle.visible {
                continue;
            }
            particle.update(dt, gravity);
            any_visible |= particle.visible;
        }
        if !any_visible {
            self.particles = Vec::new();
            self.visible = false;
        }
    }

    /// True once every particle has landed; a spent burst is skipped by
    /// iteration until its slot is reused
    #[inline]
    pub fn is_spent(&self) -> bool {
        !self.visible
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// All live bursts, owned by the host and advanced once per tick
#[derive(Debug, Clone)]
pub struct Fireworks {
    bursts: Vec<Burst>,
    /// Slots below the cursor are in use; retired slots above it are reused
    /// by later spawns
    active: usize,
    rng: Pcg32,
    gravity: f32,
}

impl Fireworks {
    /// An empty manager; `seed` fixes the burst randomness for replay
    pub fn new(seed: u64) -> Self {
        Self {
            bursts: Vec::new(),
            active: 0,
            rng: Pcg32::seed_from_u64(seed),
            gravity: GRAVITY,
        }
    }

    /// Launch a burst at `at`, reusing a retired slot when one exists
    pub fn spawn(&mut self, at: Vec2) {
        debug!("burst at {at:?}");
        let burst = Burst::new(&mut self.rng, at);
        if self.active < self.bursts.len() {
            self.bursts[self.active] = burst;
        } else {
            self.bursts.push(burst);
        }
        self.active += 1;
    }

    /// Advance every live burst by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        for burst in &mut self.bursts[..self.active] {
            burst.update(dt, self.gravity);
        }
    }

    /// Rewind the cursor once every active burst has expired, making their
    /// slots reusable; a no-op while any burst is still live
    pub fn compact(&mut self) {
        if self.active > 0 && self.bursts[..self.active].iter().all(Burst::is_spent) {
            self.active = 0;
        }
    }

    /// Bursts in use, spent ones included until the next [`compact`]
    ///
    /// [`compact`]: Fireworks::compact
    #[inline]
    pub fn active_bursts(&self) -> &[Burst] {
        &self.bursts[..self.active]
    }

    /// Number of bursts in use
    #[inline]
    pub fn len(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Every live particle across every live burst, for drawing
    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.active_bursts()
            .iter()
            .filter(|b| !b.is_spent())
            .flat_map(|b| b.particles().iter().filter(|p| p.visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_size_stays_in_range() {
        let mut fx = Fireworks::new(7);
        for i in 0..50 {
            fx.spawn(Vec2::new(i as f32 * 0.01, 0.0));
        }
        for burst in fx.active_bursts() {
            let n = burst.particles().len();
            assert!((FIREWORK_MIN_PARTICLES..=FIREWORK_MAX_PARTICLES).contains(&n));
        }
    }

    #[test]
    fn test_particles_rise_then_expire() {
        let mut fx = Fireworks::new(11);
        fx.spawn(Vec2::new(0.1, -0.3));
        fx.update(SIM_DT);
        // Fresh particles climb before gravity wins
        assert!(fx.particles().all(|p| p.pos.y > 0.0));
        assert!(fx.particles().all(|p| p.vel.y > 0.0));
        let mut ticks = 0u32;
        while fx.particles().next().is_some() && ticks < 10_000 {
            fx.update(SIM_DT);
            ticks += 1;
        }
        assert!(fx.active_bursts()[0].is_spent());
        // Spent bursts release their particle storage
        assert!(fx.active_bursts()[0].particles().is_empty());
    }

    #[test]
    fn test_compact_is_a_noop_while_bursts_live() {
        let mut fx = Fireworks::new(13);
        fx.spawn(Vec2::ZERO);
        fx.update(SIM_DT);
        fx.compact();
        assert_eq!(fx.len(), 1);
    }

    #[test]
    fn test_compact_reuses_retired_slots() {
        let mut fx = Fireworks::new(17);
        fx.spawn(Vec2::ZERO);
        fx.spawn(Vec2::new(0.2, 0.2));
        for _ in 0..10_000 {
            fx.update(SIM_DT);
        }
        assert!(fx.active_bursts().iter().all(Burst::is_spent));
        fx.compact();
        assert!(fx.is_empty());
        // The storage survives compaction; the next spawn overwrites slot 0
        fx.spawn(Vec2::new(-0.1, 0.4));
        assert_eq!(fx.len(), 1);
        assert!(!fx.active_bursts()[0].is_spent());
    }

    #[test]
    fn test_same_seed_spawns_identical_bursts() {
        let run = || {
            let mut fx = Fireworks::new(99);
            fx.spawn(Vec2::new(0.3, -0.2));
            fx.spawn(Vec2::new(-0.3, 0.6));
            fx
        };
        let a = run();
        let b = run();
        for (x, y) in a.particles().zip(b.particles()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
        assert_eq!(a.particles().count(), b.particles().count());
    }
}

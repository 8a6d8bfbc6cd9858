//! Particle emitters.
//!
//! An emitter is a bounded factory-and-container for particles, anchored at
//! the point where it was spawned. Every tick it attempts `rate` spawns,
//! advances its particles, and drops the dead ones; once its collection is
//! empty at the end of an engine tick the engine discards the emitter and
//! it never spawns again.
//!
//! # Capacity
//!
//! `max_particles` is a hard cap on live particles. Spawn attempts over the
//! cap are silently dropped, not queued: an emitter at capacity simply
//! waits for deaths to open slots.
//!
//! # Example
//!
//! ```ignore
//! let config = EmitterConfig::new()
//!     .with_rate(2)
//!     .with_max_particles(200)
//!     .with_particle(ParticleConfig::new().with_gravity(0.05));
//! let mut emitter = Emitter::with_rng(Vec2::new(320.0, 180.0), config, SpawnRng::from_seed(1));
//! emitter.update();
//! assert_eq!(emitter.len(), 2);
//! ```

use crate::particle::{Particle, ParticleConfig};
use crate::spawn::SpawnRng;
use crate::surface::Surface;
use glam::Vec2;

/// Emitter configuration.
///
/// Defaults: 5 spawn attempts per tick, capacity 1000, default particle
/// template.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    /// Spawn attempts per tick.
    pub rate: u32,
    /// Maximum live particles; attempts beyond it are dropped.
    pub max_particles: usize,
    /// Template applied to every spawned particle. The scatter velocity is
    /// overlaid on top of the template's base velocity.
    pub particle: ParticleConfig,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            rate: 5,
            max_particles: 1000,
            particle: ParticleConfig::default(),
        }
    }
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    pub fn with_particle(mut self, particle: ParticleConfig) -> Self {
        self.particle = particle;
        self
    }
}

/// A bounded particle source anchored at a fixed point.
#[derive(Debug)]
pub struct Emitter {
    position: Vec2,
    particles: Vec<Particle>,
    rate: u32,
    max_particles: usize,
    template: ParticleConfig,
    rng: SpawnRng,
}

impl Emitter {
    /// Create an emitter with an entropy-seeded spawn stream.
    pub fn new(position: Vec2, config: EmitterConfig) -> Self {
        Self::with_rng(position, config, SpawnRng::from_entropy())
    }

    /// Create an emitter with a caller-provided spawn stream.
    ///
    /// A seeded stream makes every velocity this emitter will ever draw
    /// reproducible.
    pub fn with_rng(position: Vec2, config: EmitterConfig, rng: SpawnRng) -> Self {
        Self {
            position,
            particles: Vec::new(),
            rate: config.rate,
            max_particles: config.max_particles,
            template: config.particle,
            rng,
        }
    }

    /// Anchor position, fixed at creation.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True once the collection has drained.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Live particles in insertion order (minus removed entries).
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn one particle at the anchor, unless at capacity.
    ///
    /// The particle takes the template overlaid with a random scatter
    /// velocity. At capacity this is a silent no-op.
    fn emit_one(&mut self) {
        if self.particles.len() >= self.max_particles {
            return;
        }
        let velocity = self.template.velocity + self.rng.scatter_velocity();
        let config = self.template.clone().with_velocity(velocity);
        self.particles.push(Particle::new(self.position, &config));
    }

    /// One tick: `rate` spawn attempts, then advance and cull.
    ///
    /// Every spawn attempt is made even when most are capacity no-ops.
    /// Survivors keep their relative order.
    pub fn update(&mut self) {
        for _ in 0..self.rate {
            self.emit_one();
        }
        self.particles.retain_mut(|p| p.update());
    }

    /// Draw every live particle.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for particle in &self.particles {
            particle.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_emitter(config: EmitterConfig) -> Emitter {
        Emitter::with_rng(Vec2::new(10.0, 20.0), config, SpawnRng::from_seed(99))
    }

    #[test]
    fn test_emit_one_at_capacity_is_noop() {
        let mut emitter = test_emitter(EmitterConfig::new().with_max_particles(3));
        for _ in 0..3 {
            emitter.emit_one();
        }
        let before: Vec<Particle> = emitter.particles().to_vec();

        emitter.emit_one();
        assert_eq!(emitter.len(), 3);
        assert_eq!(emitter.particles(), &before[..]);
    }

    #[test]
    fn test_update_never_exceeds_capacity() {
        for (rate, cap) in [(1u32, 0usize), (5, 2), (50, 10), (3, 1000)] {
            let mut emitter = test_emitter(
                EmitterConfig::new().with_rate(rate).with_max_particles(cap),
            );
            for _ in 0..10 {
                emitter.update();
                assert!(emitter.len() <= cap);
            }
        }
    }

    #[test]
    fn test_spawned_particles_start_at_anchor() {
        let mut emitter = test_emitter(EmitterConfig::new().with_rate(4));
        emitter.emit_one();
        assert_eq!(emitter.particles()[0].position, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_scatter_overlays_template_velocity() {
        let config = EmitterConfig::new()
            .with_particle(ParticleConfig::new().with_velocity(Vec2::new(100.0, 0.0)));
        let mut emitter = test_emitter(config);
        emitter.emit_one();
        let v = emitter.particles()[0].velocity;
        // Base velocity plus a scatter of magnitude < 2.
        assert!((v - Vec2::new(100.0, 0.0)).length() < 2.0);
        assert!(v.x > 98.0);
    }

    #[test]
    fn test_update_culls_dead_in_order() {
        // Decay 0.4: particles live exactly three updates. With rate 1,
        // each tick adds one and (from tick 3 on) the oldest dies.
        let config = EmitterConfig::new()
            .with_rate(1)
            .with_particle(ParticleConfig::new().with_decay(0.4));
        let mut emitter = test_emitter(config);

        emitter.update();
        assert_eq!(emitter.len(), 1);
        emitter.update();
        assert_eq!(emitter.len(), 2);
        emitter.update();
        assert_eq!(emitter.len(), 2);

        // Survivors stay in insertion order: older first, lower life.
        let lives: Vec<f32> = emitter.particles().iter().map(|p| p.life).collect();
        assert!(lives[0] < lives[1]);
    }

    #[test]
    fn test_rate_zero_emitter_stays_empty() {
        let mut emitter = test_emitter(EmitterConfig::new().with_rate(0));
        emitter.update();
        assert!(emitter.is_empty());
    }
}

//! The top-level engine: emitter ownership and the per-tick cycle.
//!
//! Pointer movement spawns an emitter at the pointer position; every tick
//! clears the surface, runs update-then-draw over each emitter in order,
//! and discards emitters whose particle collections have drained. There is
//! no cross-emitter state — the engine owns the emitters, each emitter owns
//! its particles, and nothing is shared.
//!
//! The engine itself is host-agnostic: the windowed shell
//! ([`crate::window`]) and the headless scheduler ([`crate::scheduler`])
//! both just feed it pointer positions and call [`Engine::tick`].
//!
//! ```ignore
//! let mut engine = Engine::with_seed(EngineConfig::default(), 7);
//! engine.pointer_moved(Vec2::new(200.0, 150.0));
//! engine.tick(&mut surface);
//! ```

use crate::emitter::{Emitter, EmitterConfig};
use crate::particle::ParticleConfig;
use crate::spawn::SpawnRng;
use crate::surface::Surface;
use glam::Vec2;

/// Engine configuration: the template applied to pointer-spawned emitters.
///
/// Defaults match the classic pointer-trail effect: 2 spawns per tick,
/// capacity 200, small short-lived particles with light gravity, and a hue
/// randomized per emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Spawn attempts per tick for pointer-spawned emitters.
    pub emitter_rate: u32,
    /// Particle capacity per pointer-spawned emitter.
    pub emitter_capacity: usize,
    /// Particle template for pointer-spawned emitters. The color field is
    /// replaced by a random hue for every new emitter.
    pub particle: ParticleConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            emitter_rate: 2,
            emitter_capacity: 200,
            particle: ParticleConfig::new()
                .with_size(3.0)
                .with_life(1.0)
                .with_decay(0.01)
                .with_gravity(0.05),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_emitter_rate(mut self, rate: u32) -> Self {
        self.emitter_rate = rate;
        self
    }

    pub fn with_emitter_capacity(mut self, capacity: usize) -> Self {
        self.emitter_capacity = capacity;
        self
    }

    pub fn with_particle(mut self, particle: ParticleConfig) -> Self {
        self.particle = particle;
        self
    }
}

/// Owns all emitters and drives the update/draw/cull cycle.
#[derive(Debug)]
pub struct Engine {
    emitters: Vec<Emitter>,
    config: EngineConfig,
    rng: SpawnRng,
    ticks: u64,
}

impl Engine {
    /// Engine with entropy-seeded randomization.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, SpawnRng::from_entropy())
    }

    /// Engine whose hues and scatter velocities replay exactly for a given
    /// seed. Two engines with the same seed, config, and pointer sequence
    /// produce identical trajectories.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, SpawnRng::from_seed(seed))
    }

    fn with_rng(config: EngineConfig, rng: SpawnRng) -> Self {
        Self {
            emitters: Vec::new(),
            config,
            rng,
            ticks: 0,
        }
    }

    /// Spawn a new emitter at a pointer position.
    ///
    /// Each pointer event gets its own emitter with a fresh random hue and
    /// an independent spawn stream forked from the engine's. There is no
    /// cap on live emitters; they self-terminate once drained.
    pub fn pointer_moved(&mut self, position: Vec2) {
        let hue = self.rng.random_hue();
        let config = EmitterConfig::new()
            .with_rate(self.config.emitter_rate)
            .with_max_particles(self.config.emitter_capacity)
            .with_particle(self.config.particle.clone().with_color(hue));
        let rng = self.rng.fork();
        self.emitters.push(Emitter::with_rng(position, config, rng));
    }

    /// One frame: clear, update and draw every emitter, prune drained ones.
    ///
    /// Emitters are visited in creation order; survivors keep their
    /// relative order.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        surface.clear();
        for emitter in &mut self.emitters {
            emitter.update();
            emitter.draw(surface);
        }
        self.emitters.retain(|e| !e.is_empty());
        self.ticks += 1;
    }

    /// Live emitters in creation order.
    pub fn emitters(&self) -> &[Emitter] {
        &self.emitters
    }

    /// Total live particles across all emitters.
    pub fn particle_count(&self) -> usize {
        self.emitters.iter().map(Emitter::len).sum()
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Pixmap;

    #[test]
    fn test_pointer_move_spawns_emitter_at_position() {
        let mut engine = Engine::with_seed(EngineConfig::default(), 1);
        engine.pointer_moved(Vec2::new(120.0, 80.0));
        engine.pointer_moved(Vec2::new(10.0, 10.0));
        assert_eq!(engine.emitters().len(), 2);
        assert_eq!(engine.emitters()[0].position(), Vec2::new(120.0, 80.0));
    }

    #[test]
    fn test_tick_spawns_per_emitter_rate() {
        let mut engine = Engine::with_seed(EngineConfig::default(), 1);
        let mut surface = Pixmap::new(64, 64);
        engine.pointer_moved(Vec2::new(32.0, 32.0));
        engine.tick(&mut surface);
        assert_eq!(engine.particle_count(), 2);
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_drained_emitters_are_pruned_in_order() {
        // Particles die on their first update, so every emitter drains in
        // the same tick it spawns.
        let config = EngineConfig::new()
            .with_emitter_rate(1)
            .with_particle(ParticleConfig::new().with_life(0.01).with_decay(0.02));
        let mut engine = Engine::with_seed(config, 5);
        let mut surface = Pixmap::new(64, 64);

        engine.pointer_moved(Vec2::new(1.0, 1.0));
        engine.pointer_moved(Vec2::new(2.0, 2.0));
        engine.tick(&mut surface);
        assert!(engine.emitters().is_empty());
    }

    #[test]
    fn test_surviving_emitters_keep_relative_order() {
        let mut engine = Engine::with_seed(EngineConfig::default(), 2);
        let mut surface = Pixmap::new(64, 64);
        engine.pointer_moved(Vec2::new(5.0, 0.0));
        engine.pointer_moved(Vec2::new(6.0, 0.0));
        engine.tick(&mut surface);

        let positions: Vec<Vec2> = engine.emitters().iter().map(|e| e.position()).collect();
        assert_eq!(positions, vec![Vec2::new(5.0, 0.0), Vec2::new(6.0, 0.0)]);
    }

    #[test]
    fn test_per_emitter_hue_differs() {
        let mut engine = Engine::with_seed(EngineConfig::default(), 3);
        let mut surface = Pixmap::new(64, 64);
        engine.pointer_moved(Vec2::ZERO);
        engine.pointer_moved(Vec2::ZERO);
        engine.tick(&mut surface);

        let a = engine.emitters()[0].particles()[0].color;
        let b = engine.emitters()[1].particles()[0].color;
        assert_ne!(a, b);
    }
}

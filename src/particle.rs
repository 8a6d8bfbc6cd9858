//! Single particles and their spawn template.
//!
//! A [`Particle`] is one simulated point: kinematic state (position,
//! velocity), visual state (size, color), and a normalized remaining life
//! that doubles as draw opacity. Each tick it runs one fixed-order step and
//! reports whether it is still alive; the owning emitter drops it the first
//! time it is not.
//!
//! # Update order
//!
//! The step order is fixed and observable in the trajectories:
//!
//! 1. velocity *= friction
//! 2. vy += gravity
//! 3. position += velocity
//! 4. life -= decay
//!
//! # Configuration
//!
//! [`ParticleConfig`] carries the per-particle template an emitter applies
//! to every spawn. Values are taken as given: life outside `(0, 1]`,
//! negative decay, or friction above 1 are not rejected, they just produce
//! correspondingly degenerate motion (a particle with decay 0 never dies).

use crate::surface::Surface;
use crate::visuals::Color;
use glam::Vec2;

/// Spawn template for particles.
///
/// Unset fields keep the defaults below; emitters overlay a random scatter
/// velocity on top of `velocity` at spawn time.
///
/// | Field | Default |
/// |----------|---------|
/// | velocity | (0, 0)  |
/// | size     | 5.0     |
/// | color    | white   |
/// | life     | 1.0     |
/// | decay    | 0.01    |
/// | gravity  | 0.1     |
/// | friction | 0.99    |
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    /// Initial velocity in pixels per tick.
    pub velocity: Vec2,
    /// Draw radius in pixels.
    pub size: f32,
    /// Opaque draw color; opacity comes from remaining life.
    pub color: Color,
    /// Starting life, nominally in `(0, 1]`.
    pub life: f32,
    /// Life lost per tick.
    pub decay: f32,
    /// Added to the y velocity every tick.
    pub gravity: f32,
    /// Multiplicative velocity damping per tick, nominally in `(0, 1]`.
    pub friction: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            size: 5.0,
            color: Color::WHITE,
            life: 1.0,
            decay: 0.01,
            gravity: 0.1,
            friction: 0.99,
        }
    }
}

impl ParticleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_life(mut self, life: f32) -> Self {
        self.life = life;
        self
    }

    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }
}

/// One simulated point with a finite lifespan.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Color,
    /// Remaining life fraction; at or below zero the particle is dead.
    pub life: f32,
    pub decay: f32,
    pub gravity: f32,
    pub friction: f32,
}

impl Particle {
    /// Create a particle at `position` from a spawn template.
    pub fn new(position: Vec2, config: &ParticleConfig) -> Self {
        Self {
            position,
            velocity: config.velocity,
            size: config.size,
            color: config.color,
            life: config.life,
            decay: config.decay,
            gravity: config.gravity,
            friction: config.friction,
        }
    }

    /// Advance one tick.
    ///
    /// Returns `true` while the particle is still alive after the decay
    /// step; the owner drops it on the first `false`.
    pub fn update(&mut self) -> bool {
        self.velocity *= self.friction;
        self.velocity.y += self.gravity;
        self.position += self.velocity;
        self.life -= self.decay;
        self.life > 0.0
    }

    /// Paint the particle as a filled circle at opacity = remaining life.
    ///
    /// Pure draw call; kinematic state is untouched.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_circle(self.position, self.size, self.color, self.life.clamp(0.0, 1.0));
    }
}

//! # glint - pointer particle trails
//!
//! CPU particle effects driven by pointer movement: every pointer position
//! spawns an [`Emitter`], every frame advances and draws its [`Particle`]s
//! as alpha-blended circles, and everything cleans up after itself once the
//! particles burn out.
//!
//! ## Quick Start
//!
//! ```ignore
//! use glint::prelude::*;
//!
//! fn main() -> Result<(), ShellError> {
//!     // Opens a window; move the pointer to paint particle trails.
//!     glint::run(EngineConfig::default())
//! }
//! ```
//!
//! Headless, the same engine runs against a CPU pixmap:
//!
//! ```ignore
//! let mut engine = Engine::with_seed(EngineConfig::default(), 7);
//! let mut pixmap = Pixmap::new(640, 360);
//! engine.pointer_moved(Vec2::new(320.0, 180.0));
//! TickLoop::new().run(&mut engine, &mut pixmap, Some(120));
//! pixmap.save_png("glint.png")?;
//! ```
//!
//! ## Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Particle`] | one simulated point: kinematics, color, finite life |
//! | [`Emitter`] | bounded factory-and-container anchored at a spawn point |
//! | [`Engine`] | owns all emitters; clear → update/draw → prune, each tick |
//! | [`Surface`] | where circles land: [`Pixmap`] (CPU) or the window (GPU) |
//! | [`TickLoop`] | headless frame driver with cancellation |
//!
//! Each tick a particle damps its velocity by `friction`, gains `gravity`
//! on the y axis, integrates, and loses `decay` from its life; life doubles
//! as draw opacity, and at zero the particle is culled. An emitter makes
//! `rate` spawn attempts per tick, capped at `max_particles` (excess
//! attempts are dropped, not queued), and is itself discarded by the engine
//! once its collection drains.
//!
//! ## Determinism
//!
//! All randomness (scatter velocities, emitter hues) flows through
//! [`SpawnRng`]; seed the engine with [`Engine::with_seed`] and identical
//! input sequences replay identical trajectories.

mod emitter;
mod engine;
mod gpu;
mod particle;
mod shader;
mod window;

pub mod error;
pub mod scheduler;
pub mod spawn;
pub mod surface;
pub mod time;
pub mod visuals;

pub use emitter::{Emitter, EmitterConfig};
pub use engine::{Engine, EngineConfig};
pub use error::{CaptureError, GpuError, ShellError};
pub use glam::Vec2;
pub use particle::{Particle, ParticleConfig};
pub use scheduler::{CancelToken, TickLoop};
pub use spawn::SpawnRng;
pub use surface::{Pixmap, Surface};
pub use visuals::Color;
pub use window::run;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use glint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::emitter::{Emitter, EmitterConfig};
    pub use crate::engine::{Engine, EngineConfig};
    pub use crate::error::ShellError;
    pub use crate::particle::{Particle, ParticleConfig};
    pub use crate::scheduler::{CancelToken, TickLoop};
    pub use crate::spawn::SpawnRng;
    pub use crate::surface::{Pixmap, Surface};
    pub use crate::time::Time;
    pub use crate::visuals::Color;
    pub use crate::Vec2;
}

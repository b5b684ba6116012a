//! # driftfield
//!
//! Ambient particle-field rendering: a fixed set of drifting, loosely
//! interconnected points animated over a full-window surface, the backdrop
//! texture found behind landing-page content.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::{Field, FieldConfig};
//!
//! fn main() -> Result<(), driftfield::RunError> {
//!     Field::new(FieldConfig::hero()).run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Fields
//!
//! A [`ParticleField`] owns a fixed population of particles. Position, size,
//! velocity, color, and opacity are randomized once at spawn; afterwards only
//! positions move. Particles drift by their per-frame velocity and wrap at
//! the surface edges with a hard reset to the opposite edge.
//!
//! Each frame the field also links every pair of particles closer than
//! 150 px with a line whose opacity fades linearly from 0.1 at distance zero
//! to nothing at the threshold. The pass is O(n²) per frame, which is the
//! point: populations are 70-100 and the code stays trivial.
//!
//! ### Presets
//!
//! [`FieldConfig`] ships four ready-made looks:
//! [`ambient`](FieldConfig::ambient), [`premium`](FieldConfig::premium),
//! [`hero`](FieldConfig::hero) (orbit rings plus pointer attraction), and
//! [`aurora`](FieldConfig::aurora) (no particles, drifting glow blobs).
//!
//! ### The frame plan
//!
//! The simulation emits a [`FramePlan`] of primitive draw commands each step
//! and never touches the GPU. The wgpu renderer consumes the plan; tests
//! assert on it directly. Pass a seed via
//! [`with_seed`](FieldConfig::with_seed) to make a layout fully
//! reproducible.

pub mod config;
pub mod error;
pub mod field;
pub mod frame;
mod gpu;
pub mod spawn;
pub mod time;
pub mod visuals;

mod app;

pub use app::Field;
pub use config::FieldConfig;
pub use error::{GpuError, RunError};
pub use field::{Orbit, Particle, ParticleField};
pub use frame::{CircleCmd, FramePlan, LineCmd};
pub use glam::Vec2;
pub use visuals::{Background, GlowDrift, LinearGradient, Palette, Rgba};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::app::Field;
    pub use crate::config::FieldConfig;
    pub use crate::field::{Orbit, Particle, ParticleField};
    pub use crate::frame::FramePlan;
    pub use crate::time::Time;
    pub use crate::visuals::{Background, GlowDrift, LinearGradient, Palette, Rgba};
    pub use crate::Vec2;
}

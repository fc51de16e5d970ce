//! Glimmer Overlay
//!
//! Pointer-reactive particle overlay engine.
//!
//! # Features
//!
//! - Ambient cube particles spawned probabilistically near the pointer
//! - Click-triggered radial bursts with a latency-decoupled pending queue
//! - Tween-driven grow/shrink/fade lifecycle with exactly-once removal
//! - Optional drifting starfield background layer
//! - Headless GPU rendering via wgpu to a transparent RGBA target
//!
//! The simulation is fully deterministic given a seed and a sequence of
//! `tick` steps; no wall clock is read once a surface is mounted.

pub mod effect;
pub mod gpu;
pub mod scene;
pub mod surface;

// Re-export commonly used types
pub use effect::{
    spawn_probability, AmbientEmitter, BurstEmitter, EffectConfig, Easing, LifecycleManager,
    Particle, ParticlePhase, PendingClick, Rng, Starfield, Tween, Vertex,
};
pub use gpu::{GpuContext, GpuError, OverlayRenderConfig, OverlayRenderer};
pub use scene::{Camera, PointerState};
pub use surface::{EffectSurface, Viewport};

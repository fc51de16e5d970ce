//! GPU rendering of the overlay vertex stream.
//!
//! Headless wgpu rendering: the simulation's billboard vertices are drawn
//! over a transparent clear color and read back as RGBA bytes.

pub mod context;
pub mod overlay_renderer;

pub use context::{GpuContext, GpuError};
pub use overlay_renderer::{OverlayRenderConfig, OverlayRenderer};

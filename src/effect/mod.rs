//! Particle effect simulation.
//!
//! CPU-side core of the overlay:
//! - Ambient: probabilistic cube spawns near the pointer
//! - Burst: click-triggered radial clusters
//! - Lifecycle: tween-driven grow/shrink/fade with exactly-once removal
//! - Starfield: optional drifting point-cloud background
//! - Billboard: projection of the render set into clip-space quads

pub mod ambient;
pub mod billboard;
pub mod burst;
pub mod lifecycle;
pub mod particle;
pub mod rng;
pub mod starfield;
pub mod tween;

pub use ambient::{spawn_probability, AmbientEmitter};
pub use billboard::{append_particle_vertices, Vertex};
pub use burst::{BurstEmitter, PendingClick};
pub use lifecycle::LifecycleManager;
pub use particle::{Particle, ParticlePhase};
pub use rng::Rng;
pub use starfield::Starfield;
pub use tween::{Easing, Tween};

use serde::{Deserialize, Serialize};

/// Upper bound of the recognized `frequency` range.
pub const FREQUENCY_MAX: u32 = 150;
/// Upper bound of the recognized `range` range.
pub const RANGE_MAX: f32 = 15.0;
/// Edge length of ambient cubes in world units.
pub const AMBIENT_CUBE_SIZE: f32 = 0.12;
/// Edge length of burst cubes in world units.
pub const BURST_CUBE_SIZE: f32 = 0.08;
/// Held opacity of ambient particles.
pub const AMBIENT_OPACITY: f32 = 0.5;
/// Initial opacity of burst particles, faded to zero over their life.
pub const BURST_OPACITY: f32 = 0.7;
/// Particles per burst.
pub const BURST_PARTICLE_COUNT: usize = 30;
/// Pending clicks older than this are dropped without spawning.
pub const CLICK_STALE_SECS: f64 = 0.1;
/// Points in the optional starfield layer.
pub const STARFIELD_POINT_COUNT: usize = 1000;

/// Near-white and grey palette shared by ambient and burst particles.
pub const LIGHT_PALETTE: [&str; 8] = [
    "#ffffff", // Pure white
    "#fafafa", "#f8f8f8", "#f5f5f5", "#f2f2f2", // Very light greys
    "#f0f0f0", "#eeeeee", "#e8e8e8", // Light greys
];

/// Effect configuration. Values are clamped to their recognized ranges on
/// construction and on set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Ambient spawn probability knob, 0-150.
    pub frequency: u32,
    /// Ambient spawn spatial spread, 0-15.
    pub range: f32,
    /// Enable the drifting starfield background layer.
    pub starfield: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            frequency: 40,
            range: 8.0,
            starfield: false,
        }
    }
}

impl EffectConfig {
    /// Copy with all knobs forced into their recognized ranges.
    pub fn clamped(mut self) -> Self {
        self.frequency = self.frequency.min(FREQUENCY_MAX);
        self.range = self.range.clamp(0.0, RANGE_MAX);
        self
    }
}

/// Parse hex color to RGB floats (accepts 6-char RGB or 8-char RGBA, alpha is
/// ignored).
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f32 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f32 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f32 / 255.0;
    Some([r, g, b])
}

/// Draw a color uniformly at random from the fixed palette.
pub fn palette_color(rng: &mut Rng) -> [f32; 3] {
    let index = ((rng.next() * LIGHT_PALETTE.len() as f32) as usize).min(LIGHT_PALETTE.len() - 1);
    parse_hex_color(LIGHT_PALETTE[index]).unwrap_or([1.0, 1.0, 1.0])
}

//! The effect surface: composition root of the overlay.
//!
//! Owns the camera, the pointer state, both emitters, the lifecycle manager,
//! and the simulation clock, and enforces the per-tick ordering: advance and
//! remove first, then the ambient spawn decision, then the pending-click
//! drain. The render set read after [`EffectSurface::tick`] already reflects
//! same-tick spawns.
//!
//! The clock is an explicit seconds accumulator. No wall clock is read inside
//! the simulation, so staleness and tween timing are fully driven by the `dt`
//! values handed to `tick`.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use crate::effect::{
    append_particle_vertices, AmbientEmitter, BurstEmitter, EffectConfig, LifecycleManager, Rng,
    Starfield, Vertex, STARFIELD_POINT_COUNT,
};
use crate::scene::{Camera, PointerState};

/// Render target dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A mounted overlay instance.
#[derive(Debug)]
pub struct EffectSurface {
    camera: Camera,
    pointer: PointerState,
    ambient: AmbientEmitter,
    burst: BurstEmitter,
    lifecycle: LifecycleManager,
    starfield: Option<Starfield>,
    rng: Rng,
    viewport: Viewport,
    /// Simulation clock in seconds, advanced only by `tick`.
    clock: f64,
    alive: bool,
}

impl EffectSurface {
    /// Mount the effect against a render target. A missing target is a silent
    /// no-op: the surface simply does not come up.
    pub fn mount(config: EffectConfig, target: Option<Viewport>) -> Option<Self> {
        let Some(viewport) = target else {
            log::debug!("no render target, overlay not mounted");
            return None;
        };
        Some(Self::mount_seeded(config, viewport, seed_from_time()))
    }

    /// Mount with an explicit RNG seed for reproducible runs.
    pub fn mount_seeded(config: EffectConfig, viewport: Viewport, seed: u32) -> Self {
        let config = config.clamped();
        let mut rng = Rng::new(seed);
        let starfield = config
            .starfield
            .then(|| Starfield::new(STARFIELD_POINT_COUNT, &mut rng));
        log::info!(
            "overlay mounted: {}x{}, frequency {}, range {}, starfield {}",
            viewport.width,
            viewport.height,
            config.frequency,
            config.range,
            config.starfield
        );
        Self {
            camera: Camera::new(viewport.width, viewport.height),
            pointer: PointerState::default(),
            ambient: AmbientEmitter::new(config.frequency, config.range),
            burst: BurstEmitter::new(),
            lifecycle: LifecycleManager::new(),
            starfield,
            rng,
            viewport,
            clock: 0.0,
            alive: true,
        }
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Ordering within the tick: existing particles advance and removals run
    /// first, then the ambient spawn decision, then the pending-click drain.
    /// No-op after teardown.
    pub fn tick(&mut self, dt: f32) {
        if !self.alive {
            return;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock += dt as f64;

        self.lifecycle.advance(dt);
        if let Some(starfield) = &mut self.starfield {
            starfield.advance(dt, &self.pointer);
        }
        if let Some(particle) = self.ambient.maybe_spawn(&mut self.rng, &self.pointer) {
            self.lifecycle.spawn(particle);
        }
        self.burst
            .drain(self.clock, &mut self.rng, &mut self.lifecycle);
    }

    /// Track the pointer in normalized coordinates.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.alive {
            return;
        }
        self.pointer.set_ndc(x, y);
    }

    /// Track the pointer from a pixel-space event with a top-left origin.
    pub fn pointer_moved_pixels(&mut self, px: f32, py: f32) {
        if !self.alive {
            return;
        }
        self.pointer
            .set_pixels(px, py, self.viewport.width, self.viewport.height);
    }

    /// Register a click at normalized coordinates. The click is resolved to a
    /// scene position immediately and queued; particles appear on the next
    /// `tick` unless the entry goes stale first.
    pub fn clicked(&mut self, x: f32, y: f32) {
        if !self.alive {
            return;
        }
        let position = self.camera.resolve_click(Vec2::new(x, y));
        self.burst.enqueue(position, self.clock);
    }

    /// Register a click from a pixel-space event.
    pub fn clicked_pixels(&mut self, px: f32, py: f32) {
        let mut at = PointerState::default();
        at.set_pixels(px, py, self.viewport.width, self.viewport.height);
        self.clicked(at.x, at.y);
    }

    /// Adapt to a new render target size. Only the projection changes; all
    /// particle state survives.
    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.alive {
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.camera.set_viewport(width, height);
    }

    pub fn set_frequency(&mut self, frequency: u32) {
        self.ambient.set_frequency(frequency);
    }

    pub fn set_range(&mut self, range: f32) {
        self.ambient.set_range(range);
    }

    /// Generate the frame's vertex list: starfield behind, particles on top.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out = Vec::new();
        if let Some(starfield) = &self.starfield {
            starfield.append_vertices(&self.camera, &mut out);
        }
        append_particle_vertices(self.lifecycle.particles(), &self.camera, &mut out);
        out
    }

    /// Release everything the surface owns. Idempotent; a torn-down surface
    /// ignores all further input and ticks.
    pub fn teardown(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        let cancelled = self.lifecycle.cancel_all();
        self.burst.clear();
        self.starfield = None;
        log::info!("overlay torn down, {cancelled} particles cancelled");
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Simulation clock in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Current render set, in spawn order.
    pub fn particles(&self) -> &[crate::effect::Particle] {
        self.lifecycle.particles()
    }

    pub fn particle_count(&self) -> usize {
        self.lifecycle.len()
    }

    pub fn spawned_total(&self) -> u64 {
        self.lifecycle.spawned_total()
    }

    pub fn removed_total(&self) -> u64 {
        self.lifecycle.removed_total()
    }

    /// Clicks queued and not yet drained.
    pub fn pending_clicks(&self) -> usize {
        self.burst.pending().len()
    }
}

/// Seed material from the wall clock, used only at mount time. Falls back to
/// a fixed seed if the system clock sits before the epoch.
fn seed_from_time() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 0x9e37_79b9,
    }
}

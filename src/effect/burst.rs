//! Click-triggered radial bursts.
//!
//! Click handlers only resolve a 3D position and enqueue it; particles are
//! materialized when the render loop drains the queue, so input latency is
//! decoupled from spawn cost. Entries older than the staleness window are
//! dropped silently.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::lifecycle::LifecycleManager;
use super::particle::{Animation, Particle};
use super::rng::Rng;
use super::tween::{Easing, Tween};
use super::{
    palette_color, BURST_CUBE_SIZE, BURST_OPACITY, BURST_PARTICLE_COUNT, CLICK_STALE_SECS,
};

/// A click that has been resolved to a scene position but not yet turned into
/// particles.
#[derive(Debug, Clone, Copy)]
pub struct PendingClick {
    pub position: Vec3,
    /// Surface clock reading when the click arrived, in seconds.
    pub queued_at: f64,
}

/// Queues resolved clicks and materializes bursts on drain.
#[derive(Debug, Default)]
pub struct BurstEmitter {
    pending: Vec<PendingClick>,
}

impl BurstEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn enqueue(&mut self, position: Vec3, now: f64) {
        self.pending.push(PendingClick {
            position,
            queued_at: now,
        });
    }

    /// Clicks awaiting the next drain.
    pub fn pending(&self) -> &[PendingClick] {
        &self.pending
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    /// Consume the whole queue: fresh entries become bursts, stale ones are
    /// discarded. Every entry leaves the queue regardless of outcome, so a
    /// second drain never double-spawns. Returns the number of particles
    /// spawned.
    pub(crate) fn drain(
        &mut self,
        now: f64,
        rng: &mut Rng,
        lifecycle: &mut LifecycleManager,
    ) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let mut spawned = 0usize;
        for click in pending {
            if now - click.queued_at > CLICK_STALE_SECS {
                log::trace!(
                    "discarding stale click queued at {:.3}s (now {:.3}s)",
                    click.queued_at,
                    now
                );
                continue;
            }
            for _ in 0..BURST_PARTICLE_COUNT {
                lifecycle.spawn(burst_particle(click.position, rng));
                spawned += 1;
            }
        }
        spawned
    }
}

/// Build one burst particle at `origin` heading outward along a random
/// spherical direction.
fn burst_particle(origin: Vec3, rng: &mut Rng) -> Particle {
    let theta = rng.next() * TAU;
    let phi = rng.next() * PI;
    let radius = 0.6 + rng.next() * 1.2;
    let direction = Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    );
    let target = origin + direction * radius;

    let peak = Vec3::splat(1.3 + rng.next());
    let spin_target = Vec3::new(rng.next() * TAU, rng.next() * TAU, rng.next() * TAU);
    let start_scale = Vec3::splat(0.2);

    Particle::new(
        origin,
        start_scale,
        BURST_OPACITY,
        palette_color(rng),
        BURST_CUBE_SIZE,
        Animation::Burst {
            drift: Tween::new(origin, target, 0.9 + rng.next() * 0.5, Easing::CubicOut),
            swell: Tween::new(start_scale, peak, 0.3, Easing::QuadOut),
            // Settle starts 0.2s after the swell ends and bottoms out at 1.1s,
            // the same moment the fade completes.
            settle: Tween::new(peak, Vec3::splat(0.01), 0.6, Easing::QuadIn).with_delay(0.5),
            // Fade completion is the removal trigger for burst particles.
            fade: Tween::new(BURST_OPACITY, 0.0, 0.8, Easing::QuadIn).with_delay(0.3),
            spin: Tween::new(Vec3::ZERO, spin_target, 1.5, Easing::QuadInOut),
        },
    )
}

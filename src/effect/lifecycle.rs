//! Particle lifecycle management.
//!
//! The manager is the sole owner of the render set: particles enter through
//! [`LifecycleManager::spawn`] and leave in exactly one of two ways, their
//! removal-gating tween completing inside [`LifecycleManager::advance`], or
//! a teardown-driven [`LifecycleManager::cancel_all`]. Nothing else holds a
//! reference to a live particle.

use super::particle::{Particle, ParticlePhase};

/// Owns every live particle and drives its tweens.
#[derive(Debug, Default)]
pub struct LifecycleManager {
    particles: Vec<Particle>,
    spawned_total: u64,
    removed_total: u64,
}

impl LifecycleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn spawn(&mut self, particle: Particle) {
        self.spawned_total += 1;
        self.particles.push(particle);
    }

    /// Advance every particle by `dt` seconds and drop the ones whose removal
    /// trigger fired. Returns the number removed in this pass.
    pub fn advance(&mut self, dt: f32) -> usize {
        let mut removed = 0usize;
        for particle in &mut self.particles {
            if particle.advance(dt) {
                removed += 1;
            }
        }
        if removed > 0 {
            self.particles
                .retain(|p| p.phase() != ParticlePhase::Removed);
        }
        self.removed_total += removed as u64;
        removed
    }

    /// Cancel all in-flight tweens and release every particle. Used on
    /// teardown; cancelled particles count toward the removal total so the
    /// one-release-per-particle invariant holds across unmount. Idempotent.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.particles.len();
        self.particles.clear();
        self.removed_total += cancelled as u64;
        cancelled
    }

    /// Current render set, in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles ever handed to the manager.
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Particles ever released (tween completion or cancellation).
    pub fn removed_total(&self) -> u64 {
        self.removed_total
    }
}

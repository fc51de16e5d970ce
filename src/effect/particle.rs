//! Particle model and per-particle animation state.

use glam::Vec3;

use super::tween::Tween;

/// Lifecycle phase of a particle.
///
/// Transitions are monotone: `Spawned → Growing → Shrinking → Removed`.
/// `Removed` is terminal and reached exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticlePhase {
    /// Created this tick, tweens not yet advanced.
    Spawned,
    /// Scale-up tween in flight.
    Growing,
    /// Heading toward removal (ambient shrink or burst fade).
    Shrinking,
    /// Removal trigger fired; about to leave the render set.
    Removed,
}

/// Tween bundle for one particle. Which tween gates removal depends on the
/// profile: ambient particles are removed when the shrink completes, burst
/// particles when the fade completes.
#[derive(Debug, Clone)]
pub(crate) enum Animation {
    Ambient {
        grow: Tween<Vec3>,
        shrink: Tween<Vec3>,
        spin: Tween<Vec3>,
    },
    Burst {
        drift: Tween<Vec3>,
        swell: Tween<Vec3>,
        settle: Tween<Vec3>,
        fade: Tween<f32>,
        spin: Tween<Vec3>,
    },
}

/// One transient visual element, exclusively owned by the lifecycle manager
/// from spawn until removal.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec3,
    pub scale: Vec3,
    /// Euler angles, cosmetic only; never gates removal.
    pub rotation: Vec3,
    pub opacity: f32,
    pub color: [f32; 3],
    /// Base cube edge length in world units.
    pub size: f32,
    phase: ParticlePhase,
    anim: Animation,
}

impl Particle {
    pub(crate) fn new(
        position: Vec3,
        scale: Vec3,
        opacity: f32,
        color: [f32; 3],
        size: f32,
        anim: Animation,
    ) -> Self {
        Self {
            position,
            scale,
            rotation: Vec3::ZERO,
            opacity,
            color,
            size,
            phase: ParticlePhase::Spawned,
            anim,
        }
    }

    pub fn phase(&self) -> ParticlePhase {
        self.phase
    }

    /// Advance all tweens by `dt` and refresh the animated fields.
    ///
    /// Returns true when the removal-gating tween completed; the caller (the
    /// lifecycle manager) drops the particle in the same pass, so the trigger
    /// observably fires at most once.
    pub(crate) fn advance(&mut self, dt: f32) -> bool {
        match &mut self.anim {
            Animation::Ambient { grow, shrink, spin } => {
                grow.advance(dt);
                shrink.advance(dt);
                self.rotation = spin.advance(dt);
                self.scale = if grow.finished() {
                    shrink.value()
                } else {
                    grow.value()
                };
                let done = shrink.finished();
                self.phase = if done {
                    ParticlePhase::Removed
                } else if grow.finished() {
                    ParticlePhase::Shrinking
                } else {
                    ParticlePhase::Growing
                };
                done
            }
            Animation::Burst {
                drift,
                swell,
                settle,
                fade,
                spin,
            } => {
                self.position = drift.advance(dt);
                swell.advance(dt);
                settle.advance(dt);
                self.scale = if swell.finished() {
                    settle.value()
                } else {
                    swell.value()
                };
                self.opacity = fade.advance(dt);
                self.rotation = spin.advance(dt);
                let done = fade.finished();
                self.phase = if done {
                    ParticlePhase::Removed
                } else if swell.finished() {
                    ParticlePhase::Shrinking
                } else {
                    ParticlePhase::Growing
                };
                done
            }
        }
    }
}

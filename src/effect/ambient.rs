//! Ambient particle emission.
//!
//! Once per tick the emitter decides whether to spawn exactly one short-lived
//! cube near the pointer. The spawn probability scales linearly with the
//! `frequency` knob; the spatial spread with `range`.

use std::f32::consts::PI;

use glam::Vec3;

use super::particle::{Animation, Particle};
use super::rng::Rng;
use super::tween::{Easing, Tween};
use super::{palette_color, AMBIENT_CUBE_SIZE, AMBIENT_OPACITY, FREQUENCY_MAX, RANGE_MAX};
use crate::scene::PointerState;

/// Per-tick spawn probability for a given frequency setting.
pub fn spawn_probability(frequency: u32) -> f32 {
    0.2 * frequency.min(FREQUENCY_MAX) as f32 / 80.0
}

/// Decides on and places ambient particles.
#[derive(Debug, Clone)]
pub struct AmbientEmitter {
    frequency: u32,
    range: f32,
}

impl AmbientEmitter {
    pub fn new(frequency: u32, range: f32) -> Self {
        Self {
            frequency: frequency.min(FREQUENCY_MAX),
            range: range.clamp(0.0, RANGE_MAX),
        }
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn set_frequency(&mut self, frequency: u32) {
        self.frequency = frequency.min(FREQUENCY_MAX);
    }

    pub fn set_range(&mut self, range: f32) {
        self.range = range.clamp(0.0, RANGE_MAX);
    }

    /// Roll the per-tick spawn decision; 0 or 1 particle per call.
    pub(crate) fn maybe_spawn(&self, rng: &mut Rng, pointer: &PointerState) -> Option<Particle> {
        if !rng.chance(spawn_probability(self.frequency)) {
            return None;
        }

        // Biased toward the pointer with a fixed offset plus jitter.
        let position = Vec3::new(
            rng.next() * self.range / 2.0 + (pointer.x - 0.25) * self.range,
            rng.next() * self.range / 2.0 + (pointer.y - 0.25) * self.range,
            rng.next() * 2.0 - 1.0,
        );

        let peak = Vec3::new(rng.next() + 0.3, rng.next() + 0.3, rng.next() + 0.3);
        let spin_target = Vec3::new(rng.next() * PI, rng.next() * PI, rng.next() * PI);

        Some(Particle::new(
            position,
            Vec3::ZERO,
            AMBIENT_OPACITY,
            palette_color(rng),
            AMBIENT_CUBE_SIZE,
            Animation::Ambient {
                grow: Tween::new(Vec3::ZERO, peak, 1.0, Easing::ExpoOut),
                shrink: Tween::new(peak, Vec3::splat(0.01), 1.2, Easing::ExpoOut)
                    .with_delay(1.0),
                spin: Tween::new(Vec3::ZERO, spin_target, 2.5, Easing::QuadInOut),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_probability_formula() {
        assert_eq!(spawn_probability(0), 0.0);
        assert!((spawn_probability(40) - 0.1).abs() < 1e-6);
        assert!((spawn_probability(80) - 0.2).abs() < 1e-6);
        assert!((spawn_probability(150) - 0.375).abs() < 1e-6);
        // Out-of-range frequency is clamped, not extrapolated.
        assert_eq!(spawn_probability(10_000), spawn_probability(150));
    }

    #[test]
    fn test_zero_frequency_never_spawns() {
        let emitter = AmbientEmitter::new(0, 8.0);
        let mut rng = Rng::new(5);
        let pointer = PointerState::default();
        for _ in 0..1_000 {
            assert!(emitter.maybe_spawn(&mut rng, &pointer).is_none());
        }
    }

    #[test]
    fn test_spawn_position_within_spread() {
        let range = 8.0;
        let emitter = AmbientEmitter::new(150, range);
        let mut rng = Rng::new(11);
        let mut pointer = PointerState::default();
        pointer.set_ndc(0.5, -0.5);

        let mut spawned = 0;
        while spawned < 200 {
            let Some(p) = emitter.maybe_spawn(&mut rng, &pointer) else {
                continue;
            };
            spawned += 1;

            // x = U(0, range/2) + (pointer.x - 0.25) * range
            let x_lo = (pointer.x - 0.25) * range;
            let x_hi = x_lo + range / 2.0;
            let y_lo = (pointer.y - 0.25) * range;
            let y_hi = y_lo + range / 2.0;
            assert!(p.position.x >= x_lo - 1e-4 && p.position.x <= x_hi + 1e-4);
            assert!(p.position.y >= y_lo - 1e-4 && p.position.y <= y_hi + 1e-4);
            assert!(p.position.z >= -1.0 && p.position.z <= 1.0);
        }
    }

    #[test]
    fn test_spawned_particle_starts_invisible() {
        let emitter = AmbientEmitter::new(150, 8.0);
        let mut rng = Rng::new(3);
        let pointer = PointerState::default();
        let p = loop {
            if let Some(p) = emitter.maybe_spawn(&mut rng, &pointer) {
                break p;
            }
        };
        assert_eq!(p.scale, Vec3::ZERO);
        assert!((p.opacity - AMBIENT_OPACITY).abs() < 1e-6);
        assert_eq!(p.size, AMBIENT_CUBE_SIZE);
    }

    #[test]
    fn test_knob_clamping() {
        let mut emitter = AmbientEmitter::new(500, 100.0);
        assert_eq!(emitter.frequency(), FREQUENCY_MAX);
        assert_eq!(emitter.range(), RANGE_MAX);
        emitter.set_range(-3.0);
        assert_eq!(emitter.range(), 0.0);
    }
}

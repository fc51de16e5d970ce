//! Drifting point-cloud background layer.
//!
//! A fixed set of points scattered in a cube, slowly rotating as a whole and
//! following the pointer with a small parallax offset. Purely decorative and
//! stateless apart from the accumulated rotation; points are never spawned or
//! removed after construction.

use glam::{Mat3, Vec2, Vec3};

use super::billboard::{push_quad, Vertex};
use super::rng::Rng;
use crate::scene::{Camera, PointerState};

/// Half-extent of the spawn cube is `STAR_SPREAD / 2`.
pub const STAR_SPREAD: f32 = 20.0;
/// Whole-field rotation rates in radians per second.
pub const STAR_ROT_RATE_X: f32 = 0.06;
pub const STAR_ROT_RATE_Y: f32 = 0.12;
/// Pointer parallax factor applied to the layer offset.
pub const STAR_PARALLAX: f32 = 0.5;
/// Point size in world units.
pub const STAR_SIZE: f32 = 0.04;
pub const STAR_OPACITY: f32 = 0.6;

#[derive(Debug, Clone)]
struct StarPoint {
    base: Vec3,
    color: [f32; 3],
}

/// The background layer state.
#[derive(Debug)]
pub struct Starfield {
    points: Vec<StarPoint>,
    rot_x: f32,
    rot_y: f32,
    offset: Vec2,
}

impl Starfield {
    pub fn new(count: usize, rng: &mut Rng) -> Self {
        let points = (0..count)
            .map(|_| StarPoint {
                base: Vec3::new(
                    (rng.next() - 0.5) * STAR_SPREAD,
                    (rng.next() - 0.5) * STAR_SPREAD,
                    (rng.next() - 0.5) * STAR_SPREAD,
                ),
                // Amber gradient: fixed hue, varying lightness.
                color: hsl_to_rgb(0.1, 0.8, 0.5 + rng.next() * 0.3),
            })
            .collect();
        Self {
            points,
            rot_x: 0.0,
            rot_y: 0.0,
            offset: Vec2::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Advance the whole-field rotation and track the pointer parallax.
    pub fn advance(&mut self, dt: f32, pointer: &PointerState) {
        let dt = dt.max(0.0);
        self.rot_x += STAR_ROT_RATE_X * dt;
        self.rot_y += STAR_ROT_RATE_Y * dt;
        self.offset = Vec2::new(pointer.x, pointer.y) * STAR_PARALLAX;
    }

    /// Append one camera-facing quad per visible point.
    pub fn append_vertices(&self, camera: &Camera, out: &mut Vec<Vertex>) {
        let rotation = Mat3::from_rotation_y(self.rot_y) * Mat3::from_rotation_x(self.rot_x);
        let offset = Vec3::new(self.offset.x, self.offset.y, 0.0);
        for point in &self.points {
            let world = rotation * point.base + offset;
            let Some((ndc, depth)) = camera.project(world) else {
                continue;
            };
            let half = camera.ndc_half_extent(STAR_SIZE, depth);
            push_quad(out, ndc, half, 0.0, point.color, STAR_OPACITY);
        }
    }
}

/// HSL to linear RGB, h/s/l all in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue = |mut t: f32| -> f32 {
        t = t.rem_euclid(1.0);
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    };
    [hue(h + 1.0 / 3.0), hue(h), hue(h - 1.0 / 3.0)]
}

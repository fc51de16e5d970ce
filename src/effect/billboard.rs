//! CPU-side vertex generation.
//!
//! Projects the particle set through the camera into clip-space quads, one
//! camera-facing billboard per particle. The GPU renderer consumes the
//! resulting vertex list as-is.

use glam::Vec2;

use super::particle::Particle;
use crate::scene::Camera;

/// Vertex data for rendering.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Clip-space xy.
    pub position: [f32; 2],
    /// Corner coordinate in [-1, 1] for fragment shading.
    pub local_pos: [f32; 2],
    pub color: [f32; 3],
    pub opacity: f32,
}

/// Append one quad (two triangles) per visible particle.
///
/// Particles behind the near plane or scaled to nothing produce no vertices.
pub fn append_particle_vertices(particles: &[Particle], camera: &Camera, out: &mut Vec<Vertex>) {
    out.reserve(particles.len() * 6);
    for particle in particles {
        let Some((ndc, depth)) = camera.project(particle.position) else {
            continue;
        };
        // Billboard footprint from the xy scale; z scale is not visible on a
        // camera-facing quad.
        let footprint = particle.size * (particle.scale.x + particle.scale.y) * 0.5;
        if footprint <= 0.0 || particle.opacity <= 0.0 {
            continue;
        }
        let half = camera.ndc_half_extent(footprint, depth);
        push_quad(
            out,
            ndc,
            half,
            particle.rotation.z,
            particle.color,
            particle.opacity,
        );
    }
}

/// Push a single rotated quad centered at `center` with the given NDC
/// half-extents.
pub fn push_quad(
    out: &mut Vec<Vertex>,
    center: Vec2,
    half: Vec2,
    roll: f32,
    color: [f32; 3],
    opacity: f32,
) {
    let (sin, cos) = roll.sin_cos();
    let corners: [[f32; 2]; 4] = [[-1.0, -1.0], [1.0, -1.0], [-1.0, 1.0], [1.0, 1.0]];

    let mut positions = [[0.0f32; 2]; 4];
    for (i, corner) in corners.iter().enumerate() {
        let rotated_x = corner[0] * cos - corner[1] * sin;
        let rotated_y = corner[0] * sin + corner[1] * cos;
        positions[i] = [
            center.x + rotated_x * half.x,
            center.y + rotated_y * half.y,
        ];
    }

    let indices = [0, 2, 1, 1, 2, 3]; // Two triangles
    for &idx in &indices {
        out.push(Vertex {
            position: positions[idx],
            local_pos: corners[idx],
            color,
            opacity,
        });
    }
}

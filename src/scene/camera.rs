//! Perspective camera and click-position resolution.

use glam::{Vec2, Vec3};

/// Vertical field of view, 75 degrees.
pub const DEFAULT_FOV_Y: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
/// Assumed distance used when ray/plane resolution degenerates.
pub const FALLBACK_CLICK_DISTANCE: f32 = 2.0;

/// Perspective camera at a fixed position looking down -Z.
#[derive(Debug, Clone)]
pub struct Camera {
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    aspect: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            fov_y: DEFAULT_FOV_Y,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            position: Vec3::new(0.0, 0.0, 5.0),
            aspect: 1.0,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Recompute the aspect ratio for a new viewport. Idempotent, touches no
    /// particle state.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Ray from the camera through a normalized screen coordinate.
    pub fn ray_through(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let half_h = (self.fov_y * 0.5).tan();
        let direction = Vec3::new(ndc.x * half_h * self.aspect, ndc.y * half_h, -1.0).normalize();
        (self.position, direction)
    }

    /// Resolve a click coordinate into a scene position.
    ///
    /// Intersects the click ray with the plane perpendicular to the view
    /// direction at the near-clip distance; any degenerate or non-finite
    /// intersection falls back to [`Camera::fallback_click`], which always
    /// succeeds. No click is ever left unresolved.
    pub fn resolve_click(&self, ndc: Vec2) -> Vec3 {
        let (origin, direction) = self.ray_through(ndc);
        let normal = Vec3::NEG_Z;
        let plane_point = origin + normal * self.near;

        let denom = direction.dot(normal);
        if denom.abs() > 1e-6 {
            let t = (plane_point - origin).dot(normal) / denom;
            if t.is_finite() && t > 0.0 {
                let hit = origin + direction * t;
                if hit.is_finite() {
                    return hit;
                }
            }
        }
        self.fallback_click(ndc)
    }

    /// Direct trigonometric projection at a fixed assumed distance.
    pub fn fallback_click(&self, ndc: Vec2) -> Vec3 {
        let half_h = (self.fov_y * 0.5).tan();
        let ndc = Vec2::new(
            if ndc.x.is_finite() { ndc.x } else { 0.0 },
            if ndc.y.is_finite() { ndc.y } else { 0.0 },
        );
        self.position
            + Vec3::new(ndc.x * half_h * self.aspect, ndc.y * half_h, -1.0)
                * FALLBACK_CLICK_DISTANCE
    }

    /// Project a world position to normalized device coordinates plus view
    /// depth. Returns `None` outside the near/far slab. Points sitting exactly
    /// on the near plane (resolved clicks do) still project.
    pub fn project(&self, point: Vec3) -> Option<(Vec2, f32)> {
        let view = point - self.position;
        let depth = -view.z;
        if depth + 1e-4 < self.near || depth > self.far {
            return None;
        }
        let half_h = (self.fov_y * 0.5).tan();
        Some((
            Vec2::new(
                view.x / (depth * half_h * self.aspect),
                view.y / (depth * half_h),
            ),
            depth,
        ))
    }

    /// NDC half-extents of an object of `world_size` edge length at `depth`.
    pub fn ndc_half_extent(&self, world_size: f32, depth: f32) -> Vec2 {
        let half_h = (self.fov_y * 0.5).tan();
        Vec2::new(
            world_size * 0.5 / (depth * half_h * self.aspect),
            world_size * 0.5 / (depth * half_h),
        )
    }
}

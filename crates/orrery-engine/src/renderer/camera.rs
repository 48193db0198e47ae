use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};
use crate::core::pick::Ray;

/// Perspective look-at camera.
///
/// The camera is described by where it sits and what it looks at; the
/// transition controller animates both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3D {
    /// Camera location in world space.
    pub position: Vec3,
    /// Look-at point in world space.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// xyz = camera position, w unused.
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Camera3D {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 3000.0,
        }
    }

    pub fn with_projection(mut self, fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        self.fov_y = fov_y;
        self.aspect = aspect;
        self.near = near;
        self.far = far;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.view_up())
    }

    /// `up`, swapped for a horizontal axis when the camera looks straight
    /// along it. A look-at basis is undefined in that case.
    fn view_up(&self) -> Vec3 {
        let forward = (self.target - self.position).normalize_or_zero();
        if forward.cross(self.up).length_squared() > 1e-8 {
            return self.up;
        }
        if self.up.abs_diff_eq(Vec3::Z, 1e-4) || self.up.abs_diff_eq(Vec3::NEG_Z, 1e-4) {
            Vec3::Y
        } else {
            Vec3::NEG_Z
        }
    }

    /// Right-handed perspective projection with depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }

    /// Resize the viewport (e.g. on window resize). Degenerate sizes are ignored.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width > 0.0 && viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Place the camera and its look-at point in one step.
    pub fn set_view(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
    }

    /// World-space ray from the camera through a pointer position given in
    /// normalized device coordinates (x right, y up, both in [-1, 1]).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.position, far - near)
    }

    /// Project a world point into normalized device coordinates.
    /// Returns `None` for points behind the camera.
    pub fn world_to_ndc(&self, point: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 200.0, 400.0), Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::{Body, BodyKind};
    use crate::core::pick::PickResolver;
    use crate::core::registry::BodyRegistry;

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera3D::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert!((ray.origin - cam.position).length() < 1e-5);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn ndc_axes_match_screen_directions() {
        let cam = Camera3D::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        let right = cam.ray_from_ndc(Vec2::new(1.0, 0.0));
        let up = cam.ray_from_ndc(Vec2::new(0.0, 1.0));
        assert!(right.direction.x > 0.0);
        assert!(up.direction.y > 0.0);
    }

    #[test]
    fn world_to_ndc_inverts_ray() {
        let cam = Camera3D::default();
        let point = Vec3::new(30.0, 10.0, -20.0);
        let ndc = cam.world_to_ndc(point).unwrap();
        let ray = cam.ray_from_ndc(ndc);
        let to_point = (point - ray.origin).normalize();
        assert!(to_point.dot(ray.direction) > 0.9999);
    }

    #[test]
    fn point_behind_camera_has_no_ndc() {
        let cam = Camera3D::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        assert!(cam.world_to_ndc(Vec3::new(0.0, 0.0, 200.0)).is_none());
    }

    #[test]
    fn top_down_camera_picks_body_below() {
        let mut reg = BodyRegistry::new();
        reg.register(Body::new("sun", "Sun", BodyKind::Star).with_radius(20.0))
            .unwrap();
        let picker = PickResolver::new();

        for height in [500.0_f32, -500.0] {
            let cam = Camera3D::new(Vec3::new(0.0, height, 0.0), Vec3::ZERO);
            assert!(cam.view_projection().is_finite());
            assert!(cam.uniform().view_proj.iter().flatten().all(|v| v.is_finite()));

            let ray = cam.ray_from_ndc(Vec2::ZERO);
            assert!((ray.direction - Vec3::new(0.0, -height.signum(), 0.0)).length() < 1e-4);
            assert_eq!(picker.pick(&reg, &cam, Vec2::ZERO).map(|hit| hit.slot), Some(0));
        }
    }

    #[test]
    fn top_down_screen_axes_stay_consistent() {
        let cam = Camera3D::new(Vec3::new(0.0, 500.0, 0.0), Vec3::ZERO);
        let right = cam.ray_from_ndc(Vec2::new(1.0, 0.0));
        let up = cam.ray_from_ndc(Vec2::new(0.0, 1.0));
        assert!(right.direction.x > 0.0);
        assert!(up.direction.z < 0.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = Camera3D::default();
        cam.resize(1920.0, 1080.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        cam.resize(0.0, 100.0);
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_is_twenty_floats() {
        assert_eq!(
            std::mem::size_of::<CameraUniform>(),
            CameraUniform::FLOATS * 4
        );
    }
}

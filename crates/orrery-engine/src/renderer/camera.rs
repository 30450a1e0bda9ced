use glam::{Mat4, Quat, Vec3};

use crate::core::matrix;

/// Perspective camera looking into a bounded scene.
///
/// The pose is an eye point plus a look *direction* (not a target), which is
/// what follow-style controllers set each frame. Clip planes are derived from
/// the scene sphere so everything inside it stays visible.
#[derive(Debug, Clone)]
pub struct SceneCamera {
    pub eye: Vec3,
    pub direction: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub scene_center: Vec3,
    pub scene_radius: f32,
}

impl SceneCamera {
    pub fn new(fov_y_degrees: f32, scene_center: Vec3, scene_radius: f32) -> Self {
        Self {
            eye: scene_center + Vec3::Z * scene_radius,
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y: fov_y_degrees.to_radians(),
            aspect: 1.0,
            scene_center,
            scene_radius,
        }
    }

    /// Place the eye and aim it along `direction`.
    pub fn look(&mut self, eye: Vec3, direction: Vec3, up: Vec3) {
        self.eye = eye;
        self.direction = direction.normalize_or(Vec3::NEG_Z);
        self.up = up.normalize_or(Vec3::Y);
    }

    /// Resize the viewport. Zero-sized canvases keep the previous aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.direction, self.up)
    }

    /// Near/far planes hugging the scene sphere as seen from the eye.
    pub fn clip_planes(&self) -> (f32, f32) {
        let dist = self.eye.distance(self.scene_center);
        let far = dist + self.scene_radius;
        let near = (dist - self.scene_radius).max(far * 1e-4);
        (near, far)
    }

    /// Projection with WebGPU clip-space depth ([0, 1]).
    pub fn projection_matrix(&self) -> Mat4 {
        let (near, far) = self.clip_planes();
        Mat4::perspective_rh(self.fov_y, self.aspect, near, far)
    }

    /// Projection × view with the translation stripped, so the skybox stays
    /// centered on the eye.
    pub fn skybox_matrix(&self) -> Mat4 {
        self.projection_matrix() * matrix::rotation_only(self.view_matrix())
    }

    /// Trackball-style orbit about the scene center. `yaw` turns around the
    /// camera's up axis, `pitch` around its right axis (radians).
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let right = self.direction.cross(self.up).normalize_or(Vec3::X);
        let rotation = Quat::from_axis_angle(self.up, -yaw) * Quat::from_axis_angle(right, -pitch);
        let offset = self.eye - self.scene_center;
        self.eye = self.scene_center + rotation * offset;
        self.direction = (rotation * self.direction).normalize_or(Vec3::NEG_Z);
        self.up = (rotation * self.up).normalize_or(Vec3::Y);
    }
}

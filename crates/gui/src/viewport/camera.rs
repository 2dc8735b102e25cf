use glam::{Mat4, Vec3, Vec4};
use shared::BoxDimensions;

use super::picking::Ray;

const MIN_DISTANCE: f32 = 0.1;

/// Arc-ball camera for 3D viewport, Z up
#[derive(Clone, Copy)]
pub struct ArcBallCamera {
    /// Rotation around Z (radians)
    pub yaw: f32,
    /// Elevation above the XY plane (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    /// Camera target point
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
    /// Zoom limits and clip planes follow the scene size
    pub scene_radius: f32,
}

impl ArcBallCamera {
    pub fn new() -> Self {
        Self {
            yaw: -0.8,
            pitch: 0.5,
            distance: 150.0,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
            scene_radius: 50.0,
        }
    }

    /// Camera looking at the whole box from the front-right, above
    pub fn framing(bounds: &BoxDimensions) -> Self {
        let mut camera = Self::new();
        camera.frame_box(bounds);
        camera
    }

    /// Re-target on the box center and back off until the box fits the view
    pub fn frame_box(&mut self, bounds: &BoxDimensions) {
        let [cx, cy, cz] = bounds.center();
        let radius = (bounds.diagonal() * 0.5) as f32;
        self.target = Vec3::new(cx as f32, cy as f32, cz as f32);
        self.scene_radius = radius.max(MIN_DISTANCE);
        self.distance = self.scene_radius / (self.fov * 0.5).sin() * 1.1;
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-1.5, 1.5);
    }

    pub fn zoom(&mut self, delta: f32) {
        let min = self.scene_radius * 0.05;
        let max = self.scene_radius * 20.0;
        self.distance = (self.distance * (1.0 - delta)).clamp(min, max);
    }

    /// Pan by a screen-space delta in pixels
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        // world units per pixel at the target distance
        let scale = 2.0 * self.distance * (self.fov * 0.5).tan() / viewport_height.max(1.0);
        let right = self.right_vector();
        let up = self.up_vector();
        self.target += (-right * dx + up * dy) * scale;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let cy = self.yaw.cos();
        let sy = self.yaw.sin();
        let cp = self.pitch.cos();
        let sp = self.pitch.sin();

        self.target
            + Vec3::new(
                self.distance * cp * cy,
                self.distance * cp * sy,
                self.distance * sp,
            )
    }

    /// View matrix (world -> camera)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Z)
    }

    /// Projection matrix (camera -> clip)
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let far = self.distance + self.scene_radius * 30.0;
        let near = (self.distance * 0.01).max(0.01);
        Mat4::perspective_rh_gl(self.fov, aspect, near, far)
    }

    /// Combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn right_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        fwd.cross(Vec3::Z).normalize_or_zero()
    }

    fn up_vector(&self) -> Vec3 {
        let fwd = (self.target - self.eye_position()).normalize_or_zero();
        let right = self.right_vector();
        right.cross(fwd).normalize_or_zero()
    }

    /// Project a 3D point to 2D screen coords
    pub fn project(&self, point: Vec3, rect: egui::Rect) -> Option<egui::Pos2> {
        let aspect = rect.width() / rect.height();
        let vp = self.view_projection(aspect);
        let p = vp * point.extend(1.0);
        if p.w <= 0.0 {
            return None;
        }
        let ndc = p.truncate() / p.w;
        let screen_x = rect.center().x + ndc.x * rect.width() * 0.5;
        let screen_y = rect.center().y - ndc.y * rect.height() * 0.5;
        Some(egui::pos2(screen_x, screen_y))
    }

    /// Cast a ray from a screen position into the 3D scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let aspect = rect.width() / rect.height();

        // Screen → NDC
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        // Inverse view-projection
        let vp_inv = self.view_projection(aspect).inverse();

        let near_world = vp_inv * Vec4::new(ndc_x, ndc_y, -1.0, 1.0);
        let far_world = vp_inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near = near_world.truncate() / near_world.w;
        let far = far_world.truncate() / far_world.w;

        Ray {
            origin: self.eye_position(),
            direction: (far - near).normalize_or_zero(),
        }
    }
}

use cgmath::{Deg, Matrix4, Vector3};
use cube_prefs::ViewPreferences;
use eyre::{Result, bail};

/// Most extreme camera pitch, in degrees.
const MAX_PITCH: f32 = 90.0;

/// Orbit camera that looks at the center of the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Current view settings.
    prefs: ViewPreferences,

    /// Rotation about the X axis, in degrees.
    pub pitch: f32,
    /// Rotation about the Y axis, in degrees.
    pub yaw: f32,
    /// Distance from the camera to the center of the cube.
    pub distance: f32,
}
impl Camera {
    /// Constructs a camera at the default position.
    pub fn new(prefs: &ViewPreferences) -> Self {
        Self {
            prefs: prefs.clone(),
            pitch: prefs.pitch,
            yaw: prefs.yaw,
            distance: prefs.distance,
        }
    }

    /// Returns the view preferences that the camera is using.
    pub fn prefs(&self) -> &ViewPreferences {
        &self.prefs
    }

    /// Resets the camera rotation and zoom.
    pub fn reset(&mut self) {
        self.pitch = self.prefs.pitch;
        self.yaw = self.prefs.yaw;
        self.distance = self.prefs.distance;
    }

    /// Rotates the camera in response to a mouse drag of `(dx, dy)` points.
    pub fn drag(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.rotate_by(dy * sensitivity, dx * sensitivity);
    }
    /// Rotates the camera by the given angles in degrees. Pitch is clamped so
    /// the camera never flips over the poles.
    pub fn rotate_by(&mut self, d_pitch: f32, d_yaw: f32) {
        self.pitch = (self.pitch + d_pitch).clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw = (self.yaw + d_yaw).rem_euclid(360.0);
    }
    /// Moves the camera toward (negative) or away from (positive) the cube.
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance + delta).clamp(self.prefs.min_distance, self.prefs.max_distance);
    }

    /// Returns the view matrix: the cube is rotated by yaw then pitch and
    /// pushed away from the camera along `-Z`.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(Vector3::new(0.0, 0.0, -self.distance))
            * Matrix4::from_angle_x(Deg(self.pitch))
            * Matrix4::from_angle_y(Deg(self.yaw))
    }

    /// Returns the perspective projection matrix for a target of the given
    /// size in pixels, using OpenGL clip space conventions (`z` from -1 to 1).
    ///
    /// Returns `Err` if either the width or height is zero.
    pub fn projection_matrix(&self, target_size: [u32; 2]) -> Result<Matrix4<f32>> {
        let [w, h] = target_size;
        if w == 0 || h == 0 {
            bail!("cube view has zero size");
        }
        let aspect = w as f32 / h as f32;
        Ok(cgmath::perspective(
            Deg(self.prefs.fov),
            aspect,
            self.prefs.near_plane,
            self.prefs.far_plane,
        ))
    }

    /// Returns the combined projection and view matrix.
    pub fn view_projection(&self, target_size: [u32; 2]) -> Result<Matrix4<f32>> {
        Ok(self.projection_matrix(target_size)? * self.view_matrix())
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Transform, point3};

    use super::*;

    fn camera() -> Camera {
        Camera::new(&ViewPreferences::default())
    }

    #[test]
    fn test_defaults() {
        let c = camera();
        assert_eq!((c.pitch, c.yaw, c.distance), (30.0, 45.0, 15.0));
    }

    #[test]
    fn test_drag_and_pitch_clamp() {
        let mut c = camera();
        c.drag(10.0, 20.0, 0.5);
        assert_eq!((c.pitch, c.yaw), (40.0, 50.0));
        c.drag(0.0, 1000.0, 0.5);
        assert_eq!(c.pitch, 90.0);
        c.drag(0.0, -5000.0, 0.5);
        assert_eq!(c.pitch, -90.0);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut c = camera();
        c.zoom(-100.0);
        assert_eq!(c.distance, 5.0);
        c.zoom(100.0);
        assert_eq!(c.distance, 25.0);
    }

    #[test]
    fn test_reset() {
        let mut c = camera();
        c.rotate_by(-10.0, 10.0);
        c.zoom(3.0);
        c.reset();
        assert_eq!(c, camera());
    }

    #[test]
    fn test_zero_size_is_error() {
        assert!(camera().view_projection([0, 10]).is_err());
        assert!(camera().view_projection([10, 0]).is_err());
        assert!(camera().view_projection([10, 10]).is_ok());
    }

    #[test]
    fn test_center_is_in_front_of_camera() {
        let c = camera();
        let center = c.view_matrix().transform_point(point3(0.0, 0.0, 0.0));
        assert!((center.z + c.distance).abs() < 1e-5);

        // Distance to any point is preserved by the rotation.
        let corner = c.view_matrix().transform_point(point3(1.0, 1.0, 1.0));
        let dist = (corner - center).magnitude();
        assert!((dist - 3.0_f32.sqrt()).abs() < 1e-5);
    }
}

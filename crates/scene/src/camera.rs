use foundation::math::{Mat4, Vec3, mat4_look_at_rh, mat4_mul, mat4_perspective_rh_z0};
use serde::Deserialize;

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraConfig {
    pub fov_y_deg: f64,
    pub near: f64,
    pub far: f64,
    /// Distance from the origin along +Z.
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_deg: f64,
    pub near: f64,
    pub far: f64,
    pub aspect: f64,
    pub position: Vec3,
    pub target: Vec3,
}

impl PerspectiveCamera {
    pub fn new(config: &CameraConfig, width: f64, height: f64) -> Self {
        let mut camera = Self {
            fov_y_deg: config.fov_y_deg,
            near: config.near,
            far: config.far,
            aspect: 1.0,
            position: Vec3::new(0.0, 0.0, config.distance),
            target: Vec3::ZERO,
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Updates the aspect ratio from the viewport size.
    ///
    /// A collapsed viewport (hidden container) keeps the previous aspect and
    /// returns `false`.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> bool {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.aspect = width / height;
            true
        } else {
            false
        }
    }

    pub fn projection(&self) -> Mat4 {
        mat4_perspective_rh_z0(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self) -> Mat4 {
        mat4_look_at_rh(self.position, self.target, Vec3::UP)
    }

    pub fn view_proj(&self) -> Mat4 {
        mat4_mul(self.projection(), self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraConfig, PerspectiveCamera};

    #[test]
    fn defaults_match_viewer_setup() {
        let camera = PerspectiveCamera::new(&CameraConfig::default(), 800.0, 600.0);
        assert_eq!(camera.fov_y_deg, 75.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
        assert_eq!(camera.position.z, 5.0);
        assert_eq!(camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn aspect_tracks_every_positive_viewport() {
        let mut camera = PerspectiveCamera::new(&CameraConfig::default(), 1.0, 1.0);
        for w in [1.0, 3.0, 320.0, 1280.0, 4096.5] {
            for h in [1.0, 7.0, 240.0, 720.0, 2160.25] {
                assert!(camera.set_viewport(w, h));
                assert_eq!(camera.aspect, w / h);
            }
        }
    }

    #[test]
    fn collapsed_viewport_keeps_previous_aspect() {
        let mut camera = PerspectiveCamera::new(&CameraConfig::default(), 400.0, 200.0);
        assert!(!camera.set_viewport(0.0, 200.0));
        assert!(!camera.set_viewport(400.0, 0.0));
        assert_eq!(camera.aspect, 2.0);

        let hidden = PerspectiveCamera::new(&CameraConfig::default(), 0.0, 0.0);
        assert_eq!(hidden.aspect, 1.0);
    }
}

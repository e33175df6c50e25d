use foundation::math::{Mat4, Vec3, mat4_from_trs};

/// Node transform: translation, Euler XYZ rotation (radians) and uniform scale.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f64,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn scaled(scale: f64) -> Self {
        Self {
            scale,
            ..Self::identity()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        mat4_from_trs(self.position, self.rotation, self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;
    use foundation::math::{MAT4_IDENTITY, Vec3};

    #[test]
    fn identity_is_origin() {
        let transform = Transform::identity();
        assert_eq!(transform.position, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(transform.matrix(), MAT4_IDENTITY);
    }

    #[test]
    fn scaled_keeps_rotation_zero() {
        let t = Transform::scaled(2.2);
        assert_eq!(t.rotation, Vec3::ZERO);
        assert!((t.matrix()[1][1] - 2.2).abs() < 1e-6);
    }
}

//! Column-major 4x4 matrices in the layout WGSL expects (`m[col][row]`).

use super::Vec3;

pub type Mat4 = [[f32; 4]; 4];

pub const MAT4_IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

pub fn mat4_mul(a: Mat4, b: Mat4) -> Mat4 {
    // c = a * b
    let mut c = [[0.0f32; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            c[col][row] = a[0][row] * b[col][0]
                + a[1][row] * b[col][1]
                + a[2][row] * b[col][2]
                + a[3][row] * b[col][3];
        }
    }
    c
}

pub fn mat4_transform_point(m: Mat4, p: [f32; 3]) -> [f32; 3] {
    let mut out = [0.0f32; 3];
    for (row, o) in out.iter_mut().enumerate() {
        *o = m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row];
    }
    out
}

/// Applies only the upper 3x3 block; callers renormalize.
pub fn mat4_transform_vector(m: Mat4, v: [f32; 3]) -> [f32; 3] {
    let mut out = [0.0f32; 3];
    for (row, o) in out.iter_mut().enumerate() {
        *o = m[0][row] * v[0] + m[1][row] * v[1] + m[2][row] * v[2];
    }
    out
}

/// RH perspective projection with depth range [0, 1].
pub fn mat4_perspective_rh_z0(fov_y_rad: f64, aspect: f64, near: f64, far: f64) -> Mat4 {
    let f = 1.0 / (0.5 * fov_y_rad).tan();
    let m00 = (f / aspect) as f32;
    let m11 = f as f32;
    let m22 = (far / (near - far)) as f32;
    let m23 = ((near * far) / (near - far)) as f32;

    [
        [m00, 0.0, 0.0, 0.0],
        [0.0, m11, 0.0, 0.0],
        [0.0, 0.0, m22, -1.0],
        [0.0, 0.0, m23, 0.0],
    ]
}

pub fn mat4_look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let f = (target - eye).normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);

    let ex = -s.dot(eye);
    let ey = -u.dot(eye);
    let ez = f.dot(eye);

    [
        [s.x as f32, u.x as f32, (-f.x) as f32, 0.0],
        [s.y as f32, u.y as f32, (-f.y) as f32, 0.0],
        [s.z as f32, u.z as f32, (-f.z) as f32, 0.0],
        [ex as f32, ey as f32, ez as f32, 1.0],
    ]
}

/// Translation * Rotation * Scale, with rotation applied as intrinsic
/// Euler angles in XYZ order (`R = Rx * Ry * Rz`).
pub fn mat4_from_trs(translation: Vec3, euler_xyz: Vec3, scale: f64) -> Mat4 {
    let (sx, cx) = euler_xyz.x.sin_cos();
    let (sy, cy) = euler_xyz.y.sin_cos();
    let (sz, cz) = euler_xyz.z.sin_cos();

    // Row-major rotation entries r[row][col].
    let r = [
        [cy * cz, -cy * sz, sy],
        [cx * sz + sx * sy * cz, cx * cz - sx * sy * sz, -sx * cy],
        [sx * sz - cx * sy * cz, sx * cz + cx * sy * sz, cx * cy],
    ];

    let mut m = MAT4_IDENTITY;
    for col in 0..3 {
        for row in 0..3 {
            m[col][row] = (r[row][col] * scale) as f32;
        }
    }
    m[3][0] = translation.x as f32;
    m[3][1] = translation.y as f32;
    m[3][2] = translation.z as f32;
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn identity_is_neutral() {
        let m = mat4_from_trs(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.3, 0.2, 0.1), 2.0);
        assert_eq!(mat4_mul(MAT4_IDENTITY, m), m);
        assert_eq!(mat4_mul(m, MAT4_IDENTITY), m);
    }

    #[test]
    fn trs_scales_then_translates() {
        let m = mat4_from_trs(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 2.0);
        assert!(approx(mat4_transform_point(m, [1.0, 0.0, 0.0]), [2.0, 1.0, 0.0]));
    }

    #[test]
    fn yaw_rotates_x_towards_minus_z() {
        let m = mat4_from_trs(
            Vec3::ZERO,
            Vec3::new(0.0, std::f64::consts::FRAC_PI_2, 0.0),
            1.0,
        );
        assert!(approx(mat4_transform_point(m, [1.0, 0.0, 0.0]), [0.0, 0.0, -1.0]));
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = mat4_look_at_rh(eye, Vec3::ZERO, Vec3::UP);
        assert!(approx(mat4_transform_point(view, eye.to_f32()), [0.0, 0.0, 0.0]));
        // Target ends up straight ahead (negative z in view space).
        assert!(approx(mat4_transform_point(view, [0.0, 0.0, 0.0]), [0.0, 0.0, -5.0]));
    }

    #[test]
    fn perspective_maps_near_plane_to_zero_depth() {
        let proj = mat4_perspective_rh_z0(75f64.to_radians(), 1.5, 0.1, 1000.0);
        let z = -0.1f32;
        let clip_z = proj[2][2] * z + proj[3][2];
        let clip_w = proj[2][3] * z;
        assert!((clip_z / clip_w).abs() < 1e-5);
    }
}

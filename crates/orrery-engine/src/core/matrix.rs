/// Degree-based transform helpers on top of glam.
///
/// Scene code describes motion in degrees (orbits, spins, tilts); these
/// helpers keep the conversion in one place. All matrices use the column
/// vector convention, so `compose(&[a, b, c])` applies `c` first.

use glam::{Mat3, Mat4, Vec3};

/// Determinant below which a matrix is treated as singular.
const SINGULAR_EPSILON: f32 = 1e-12;

/// Wrap an unbounded angle in degrees into [0, 360) before it reaches f32 trig.
pub fn wrap_degrees(degrees: f64) -> f32 {
    degrees.rem_euclid(360.0) as f32
}

pub fn rotate_x(degrees: f32) -> Mat4 {
    Mat4::from_rotation_x(degrees.to_radians())
}

pub fn rotate_y(degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(degrees.to_radians())
}

pub fn rotate_z(degrees: f32) -> Mat4 {
    Mat4::from_rotation_z(degrees.to_radians())
}

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

pub fn uniform_scale(s: f32) -> Mat4 {
    scale(s, s, s)
}

/// Multiply left to right: `compose(&[a, b, c]) == a * b * c`.
pub fn compose(parts: &[Mat4]) -> Mat4 {
    parts.iter().fold(Mat4::IDENTITY, |acc, m| acc * *m)
}

/// Inverse-transpose of the upper 3×3, for transforming normals.
///
/// A singular input (zero scale) has no inverse; identity is returned so
/// the shader still receives finite values.
pub fn normal_matrix(model_view: Mat4) -> Mat3 {
    let m = Mat3::from_mat4(model_view);
    if m.determinant().abs() < SINGULAR_EPSILON {
        return Mat3::IDENTITY;
    }
    m.inverse().transpose()
}

/// Drop the translation of a view matrix (skybox rendering).
pub fn rotation_only(view: Mat4) -> Mat4 {
    Mat4::from_mat3(Mat3::from_mat4(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn compose_applies_rightmost_first() {
        // translate then rotate 90° about Z: (1,0,0) -> (2,0,0) -> (0,2,0)
        let m = compose(&[rotate_z(90.0), translate(1.0, 0.0, 0.0)]);
        let p = m.transform_point3(Vec3::X);
        assert!(approx(p, Vec3::new(0.0, 2.0, 0.0)), "got {p:?}");
    }

    #[test]
    fn wrap_degrees_is_periodic() {
        assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-5);
        assert!((wrap_degrees(-10.0) - 350.0).abs() < 1e-5);
    }

    #[test]
    fn normal_matrix_of_rotation_is_rotation() {
        let r = rotate_y(35.0);
        let n = normal_matrix(r);
        let expected = Mat3::from_mat4(r);
        assert!(n.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let n = normal_matrix(scale(2.0, 1.0, 1.0));
        assert!((n.x_axis.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn singular_input_yields_identity() {
        let n = normal_matrix(uniform_scale(0.0));
        assert_eq!(n, Mat3::IDENTITY);
    }

    #[test]
    fn rotation_only_drops_translation() {
        let view = compose(&[translate(1.0, 2.0, 3.0), rotate_x(30.0)]);
        let r = rotation_only(view);
        assert!(approx(r.transform_point3(Vec3::ZERO), Vec3::ZERO));
    }
}

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::error::Error;
use super::*;

// ============================================================================
// Validate
// ============================================================================

#[test]
fn test_finite_values_are_valid() {
    assert!(1.5f32.is_valid());
    assert!(Vec2::new(1.0, -2.0).is_valid());
    assert!(Vec3::new(0.0, 1.0, 2.0).is_valid());
    assert!(Vec4::ONE.is_valid());
    assert!(Mat3::IDENTITY.is_valid());
    assert!(Mat4::IDENTITY.is_valid());
}

#[test]
fn test_nan_and_infinity_are_invalid() {
    assert!(!f32::NAN.is_valid());
    assert!(!Vec2::new(f32::INFINITY, 0.0).is_valid());
    assert!(!Vec3::new(0.0, f32::NAN, 0.0).is_valid());
    assert!(!Vec4::new(0.0, 0.0, 0.0, f32::NEG_INFINITY).is_valid());

    let mut m = Mat4::IDENTITY;
    m.w_axis.z = f32::NAN;
    assert!(!m.is_valid());

    let mut m3 = Mat3::IDENTITY;
    m3.x_axis.y = f32::INFINITY;
    assert!(!m3.is_valid());
}

#[test]
fn test_mat2_validity() {
    assert!(Mat2::IDENTITY.is_valid());
    let mut m = Mat2::IDENTITY;
    m.y_axis.x = f32::NAN;
    assert!(!m.is_valid());
}

#[test]
fn test_normalizing_zero_vector_is_invalid() {
    assert!(!Vec3::ZERO.normalize().is_valid());
}

// ============================================================================
// ComponentAccess / MatrixAccess
// ============================================================================

#[test]
fn test_component_in_range() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.component(0).unwrap(), 1.0);
    assert_eq!(v.component(2).unwrap(), 3.0);

    let mut w = Vec4::ZERO;
    w.set_component(3, 9.0).unwrap();
    assert_eq!(w.w, 9.0);
}

#[test]
fn test_component_out_of_range() {
    let v = Vec2::new(1.0, 2.0);
    match v.component(2) {
        Err(Error::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let mut v3 = Vec3::ZERO;
    assert!(v3.set_component(3, 1.0).is_err());
    assert_eq!(v3, Vec3::ZERO);
}

#[test]
fn test_matrix_element_is_column_major() {
    let m = Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0));
    // Translation lives in the fourth column
    assert_eq!(m.element(3, 0).unwrap(), 5.0);
    assert_eq!(m.element(3, 2).unwrap(), 7.0);
    assert_eq!(m.column(3).unwrap(), Vec4::new(5.0, 6.0, 7.0, 1.0));
}

#[test]
fn test_matrix_access_out_of_range() {
    assert!(matches!(
        Mat3::IDENTITY.column(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(matches!(
        Mat4::IDENTITY.element(0, 4),
        Err(Error::IndexOutOfRange { index: 4, len: 4 })
    ));
}

#[test]
fn test_mat2_access() {
    let m = Mat2::from_cols(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
    assert_eq!(m.column(1).unwrap(), Vec2::new(3.0, 4.0));
    assert_eq!(m.element(0, 1).unwrap(), 2.0);
    assert!(matches!(m.column(2), Err(Error::IndexOutOfRange { index: 2, len: 2 })));
    assert!(matches!(m.element(1, 2), Err(Error::IndexOutOfRange { index: 2, len: 2 })));
}

// ============================================================================
// TryInverse
// ============================================================================

#[test]
fn test_inverse_of_general_matrix() {
    let m = Mat4::from_cols_array(&[
        2.0, 0.0, 1.0, 0.0,
        1.0, 3.0, 0.0, 0.0,
        0.0, 1.0, 4.0, 0.0,
        1.0, 2.0, 3.0, 1.0,
    ]);
    let inv = m.try_inverse().unwrap();
    assert!((m * inv).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    assert!((inv * m).abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn test_inverse_of_mat3() {
    let m = Mat3::from_cols_array(&[
        1.0, 2.0, 0.0,
        0.0, 1.0, 0.0,
        3.0, 0.0, 2.0,
    ]);
    let inv = m.try_inverse().unwrap();
    assert!((m * inv).abs_diff_eq(Mat3::IDENTITY, 1e-6));
}

#[test]
fn test_inverse_of_singular_matrix_is_error() {
    assert!(matches!(Mat4::ZERO.try_inverse(), Err(Error::SingularMatrix(_))));

    let flattened = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
    assert!(matches!(flattened.try_inverse(), Err(Error::SingularMatrix(_))));

    let duplicated = Mat4::from_cols_array(&[
        1.0, 2.0, 3.0, 4.0,
        1.0, 2.0, 3.0, 4.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 1.0,
    ]);
    assert!(matches!(duplicated.try_inverse(), Err(Error::SingularMatrix(_))));

    assert!(matches!(Mat3::ZERO.try_inverse(), Err(Error::SingularMatrix(_))));
}

#[test]
fn test_inverse_of_nan_matrix_is_error() {
    let mut m = Mat4::IDENTITY;
    m.x_axis.x = f32::NAN;
    assert!(matches!(m.try_inverse(), Err(Error::SingularMatrix(_))));
}

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn test_reorthogonalize_up_removes_view_component() {
    let view_axis = Vec3::new(0.0, 0.0, 5.0);
    let up = Vec3::new(0.0, 1.0, 1.0);
    let fixed = reorthogonalize_up(view_axis, up);
    assert!(fixed.dot(view_axis).abs() < 1e-6);
    assert!((fixed.length() - 1.0).abs() < 1e-6);
    assert!(fixed.abs_diff_eq(Vec3::Y, 1e-6));
}

#[test]
fn test_reorthogonalize_parallel_up_is_invalid() {
    let fixed = reorthogonalize_up(Vec3::Y, Vec3::Y * 2.0);
    assert!(!fixed.is_valid());
}

#[test]
fn test_rotate_about_axis() {
    let rotated = rotate_about_axis(Vec3::X, Vec3::Z * 3.0, std::f32::consts::FRAC_PI_2);
    assert!(rotated.abs_diff_eq(Vec3::Y, 1e-6));
    assert!(!rotate_about_axis(Vec3::X, Vec3::ZERO, 1.0).is_valid());
}

#[test]
fn test_wrap_angle() {
    use std::f32::consts::PI;
    assert!((wrap_angle(0.5) - 0.5).abs() < 1e-6);
    assert!((wrap_angle(2.0 * PI + 0.25) - 0.25).abs() < 1e-5);
    assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-5);
    assert!((wrap_angle(-PI) - PI).abs() < 1e-5);
}

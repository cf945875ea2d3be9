use glam::{Mat3, Mat4, Vec3, Vec4};
use crate::error::Error;
use super::*;

#[test]
fn test_look_at_axis_aligned_is_identity_rotation() {
    let view = look_at(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::Y).unwrap();
    assert!(Mat3::from_mat4(view).abs_diff_eq(Mat3::IDENTITY, 1e-6));
    // Only the eye offset remains in the translation column
    assert!(view.w_axis.abs_diff_eq(Vec4::new(0.0, 0.0, -1.0, 1.0), 1e-6));
}

#[test]
fn test_look_at_maps_center_onto_negative_z() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let center = Vec3::new(-1.0, 0.5, 2.0);
    let view = look_at(eye, center, Vec3::Y).unwrap();
    let c = view.transform_point3(center);
    assert!(c.x.abs() < 1e-5);
    assert!(c.y.abs() < 1e-5);
    assert!((c.z + (center - eye).length()).abs() < 1e-5);
    assert!(view.transform_point3(eye).abs_diff_eq(Vec3::ZERO, 1e-5));
}

#[test]
fn test_look_at_matches_glam() {
    let eye = Vec3::new(1.0, 2.0, 3.0);
    let up = Vec3::new(0.1, 1.0, 0.0);
    assert_eq!(look_at(eye, Vec3::ZERO, up).unwrap(), Mat4::look_at_rh(eye, Vec3::ZERO, up));
}

#[test]
fn test_look_at_rejects_coincident_eye_and_center() {
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert!(matches!(look_at(p, p, Vec3::Y), Err(Error::DegenerateGeometry(_))));
    assert!(matches!(
        look_at(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ZERO, Vec3::Y),
        Err(Error::DegenerateGeometry(_))
    ));
}

#[test]
fn test_look_at_with_parallel_up_falls_back() {
    let view = look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y).unwrap();
    assert!(view.is_finite());
    let rotation = Mat3::from_mat4(view);
    // Still a rotation: orthonormal with determinant 1
    assert!((rotation.determinant() - 1.0).abs() < 1e-5);
    assert!((rotation * rotation.transpose()).abs_diff_eq(Mat3::IDENTITY, 1e-5));
}

#[test]
fn test_fallback_up_picks_least_aligned_axis() {
    assert_eq!(fallback_up(Vec3::Y), Vec3::Z);
    assert_eq!(fallback_up(Vec3::new(0.0, 0.0, -1.0)), Vec3::Y);
    assert_eq!(fallback_up(Vec3::new(0.2, 0.9, 0.9).normalize()), Vec3::X);
}

#[test]
fn test_usable_up_keeps_valid_up() {
    let up = Vec3::new(0.0, 2.0, 0.5);
    assert_eq!(usable_up(Vec3::new(0.0, 0.0, -1.0), up), up);
    assert_eq!(usable_up(Vec3::X, Vec3::ZERO), Vec3::Y);
}

#[test]
fn test_view_to_world_maps_view_axes_to_world() {
    let eye = Vec3::new(5.0, 0.0, 0.0);
    let to_world = view_to_world(eye, Vec3::ZERO, Vec3::Y).unwrap();
    // View +Z points from center toward the eye
    assert!(to_world.transform_vector3(Vec3::Z).abs_diff_eq(Vec3::X, 1e-6));
    assert!(to_world.transform_vector3(Vec3::Y).abs_diff_eq(Vec3::Y, 1e-6));
    // View +X is the screen right direction
    assert!(to_world.transform_vector3(Vec3::X).abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-6));
}

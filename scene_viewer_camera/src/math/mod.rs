//! Math kernel: a thin extension layer over glam.
//!
//! glam provides the value types (`Vec2`/`Vec3`/`Vec4`, `Mat3`/`Mat4`, `Quat`)
//! and operators. This module adds what the camera needs on top:
//! validity checks, checked component access, guarded inversion and the
//! two small geometric helpers shared by the gesture mappers.

mod validity;
mod access;
mod inverse;

pub use validity::Validate;
pub use access::{ComponentAccess, MatrixAccess};
pub use inverse::TryInverse;

use glam::{Quat, Vec3};

/// Re-derive an up vector orthogonal to `view_axis` (double cross product).
///
/// Returns a unit vector. The result is NaN when `up` is parallel to
/// `view_axis`; callers check it with [`Validate::is_valid`].
pub fn reorthogonalize_up(view_axis: Vec3, up: Vec3) -> Vec3 {
    view_axis.cross(up).cross(view_axis).normalize()
}

/// Rotate `v` about `axis` (need not be unit length) by `angle` radians.
///
/// A zero or non-finite axis yields a non-finite result.
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    Quat::from_axis_angle(axis.normalize(), angle) * v
}

/// Wrap an angle into (-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;

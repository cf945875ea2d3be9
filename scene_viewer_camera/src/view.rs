//! View matrix builder.
//!
//! `look_at` builds the world → view transform from eye/center/up with the
//! usual Gram-Schmidt basis: forward = normalize(center - eye),
//! side = normalize(forward × up), true up = side × forward.

use glam::{Mat4, Vec3};
use crate::camera_warn;
use crate::camera_bail;
use crate::error::{Error, Result};
use crate::math::{TryInverse, Validate};

const SOURCE: &str = "camera3d::view";

/// Squared sine of the smallest angle accepted between `up` and the view direction
const PARALLEL_EPSILON: f32 = 1.0e-10;

/// World axis least aligned with `forward`, used when `up` cannot define a side vector.
pub fn fallback_up(forward: Vec3) -> Vec3 {
    let a = forward.abs();
    if a.y <= a.x && a.y <= a.z {
        Vec3::Y
    } else if a.z <= a.x {
        Vec3::Z
    } else {
        Vec3::X
    }
}

/// Up vector usable with `forward`: `up` itself, or [`fallback_up`] when `up` is
/// zero, not finite, or parallel to `forward`.
pub fn usable_up(forward: Vec3, up: Vec3) -> Vec3 {
    let f = forward.normalize();
    let side = f.cross(up);
    if up.is_valid() && side.length_squared() > PARALLEL_EPSILON * up.length_squared().max(1.0) {
        return up;
    }
    let replacement = fallback_up(f);
    camera_warn!(SOURCE, "up {:?} is parallel to view direction {:?}, using {:?}", up, f, replacement);
    replacement
}

/// View matrix looking from `eye` toward `center`.
///
/// # Errors
///
/// `Error::DegenerateGeometry` when `eye == center` or either point is not finite.
/// An unusable `up` is not an error: it is replaced by [`fallback_up`].
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Result<Mat4> {
    let forward = center - eye;
    if !forward.is_valid() || forward.length_squared() == 0.0 {
        camera_bail!(Error::DegenerateGeometry, SOURCE,
            "look_at: eye {:?} and center {:?} do not define a direction", eye, center);
    }
    let up = usable_up(forward, up);
    Ok(Mat4::look_at_rh(eye, center, up))
}

/// Transform from view space back to world space for a camera whose view
/// direction is `center - eye`. Only the rotation part matters to callers
/// mapping directions, so `eye - center` alone is enough to build it.
pub fn view_to_world(eye: Vec3, center: Vec3, up: Vec3) -> Result<Mat4> {
    look_at(eye - center, Vec3::ZERO, up)?.try_inverse()
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;

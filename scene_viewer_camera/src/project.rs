//! World ↔ window coordinate mapping (gluProject / gluUnProject semantics).
//!
//! Window coordinates have their origin at the viewport's lower-left corner
//! and carry depth in `[min_depth, max_depth]`.

use glam::{Mat4, Vec3, Vec4};
use crate::camera_bail;
use crate::error::{Error, Result};
use crate::math::TryInverse;
use crate::viewport::Viewport;

const SOURCE: &str = "camera3d::project";

fn check_viewport(viewport: &Viewport) -> Result<()> {
    if !(viewport.width > 0.0 && viewport.height > 0.0) {
        camera_bail!(Error::InvalidArgument, SOURCE,
            "viewport size must be positive, got {}x{}", viewport.width, viewport.height);
    }
    if viewport.max_depth == viewport.min_depth {
        camera_bail!(Error::InvalidArgument, SOURCE,
            "viewport depth range is empty ({})", viewport.min_depth);
    }
    Ok(())
}

/// Map a world-space point to window coordinates.
///
/// `model` is the model-view matrix (the view matrix for world-space points).
///
/// # Errors
///
/// - `Error::InvalidArgument` for an empty viewport
/// - `Error::DegenerateGeometry` when the point lands on the eye plane (`w == 0`)
pub fn project(obj: Vec3, model: &Mat4, proj: &Mat4, viewport: &Viewport) -> Result<Vec3> {
    check_viewport(viewport)?;
    let clip = *proj * (*model * obj.extend(1.0));
    if clip.w == 0.0 || !clip.is_finite() {
        camera_bail!(Error::DegenerateGeometry, SOURCE,
            "project: {:?} has clip w = {}", obj, clip.w);
    }
    let ndc = clip.truncate() / clip.w;
    Ok(Vec3::new(
        viewport.x + (ndc.x + 1.0) * 0.5 * viewport.width,
        viewport.y + (ndc.y + 1.0) * 0.5 * viewport.height,
        viewport.min_depth + (ndc.z + 1.0) * 0.5 * (viewport.max_depth - viewport.min_depth),
    ))
}

/// Map window coordinates (with depth) back to a world-space point.
///
/// # Errors
///
/// - `Error::InvalidArgument` for an empty viewport
/// - `Error::SingularMatrix` when `proj * model` cannot be inverted
/// - `Error::DegenerateGeometry` when the unprojected point is at infinity
pub fn unproject(win: Vec3, model: &Mat4, proj: &Mat4, viewport: &Viewport) -> Result<Vec3> {
    check_viewport(viewport)?;
    let inverse = (*proj * *model).try_inverse()?;
    let ndc = Vec4::new(
        2.0 * (win.x - viewport.x) / viewport.width - 1.0,
        2.0 * (win.y - viewport.y) / viewport.height - 1.0,
        2.0 * (win.z - viewport.min_depth) / (viewport.max_depth - viewport.min_depth) - 1.0,
        1.0,
    );
    let obj = inverse * ndc;
    if obj.w == 0.0 || !obj.is_finite() {
        camera_bail!(Error::DegenerateGeometry, SOURCE,
            "unproject: {:?} maps to a point at infinity", win);
    }
    Ok(obj.truncate() / obj.w)
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;

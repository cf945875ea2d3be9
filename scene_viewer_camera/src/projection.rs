//! Projection builders.
//!
//! Pure functions returning OpenGL-convention projection matrices
//! (right-handed view space, camera looking down −Z, clip depth in [-1, 1]).
//! Every builder validates its preconditions and reports violations as
//! `Error::InvalidArgument`; identical inputs always yield identical matrices.

use glam::{Mat4, Vec4};
use crate::camera_bail;
use crate::error::{Error, Result};

const SOURCE: &str = "camera3d::projection";

fn check_finite(name: &str, values: &[f32]) -> Result<()> {
    if values.iter().any(|v| !v.is_finite()) {
        camera_bail!(Error::InvalidArgument, SOURCE, "{}: parameters must be finite, got {:?}", name, values);
    }
    Ok(())
}

fn check_box(name: &str, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<()> {
    check_finite(name, &[left, right, bottom, top, near, far])?;
    if left == right {
        camera_bail!(Error::InvalidArgument, SOURCE, "{}: left == right ({})", name, left);
    }
    if bottom == top {
        camera_bail!(Error::InvalidArgument, SOURCE, "{}: bottom == top ({})", name, bottom);
    }
    if near == far {
        camera_bail!(Error::InvalidArgument, SOURCE, "{}: near == far ({})", name, near);
    }
    Ok(())
}

fn check_fov(name: &str, fov_y: f32, aspect: f32) -> Result<()> {
    if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
        camera_bail!(Error::InvalidArgument, SOURCE, "{}: fov_y must be in (0, π), got {}", name, fov_y);
    }
    if !(aspect > 0.0) {
        camera_bail!(Error::InvalidArgument, SOURCE, "{}: aspect must be positive, got {}", name, aspect);
    }
    Ok(())
}

/// Orthographic projection mapping the box `[left, right] x [bottom, top] x [-near, -far]`
/// onto the NDC cube.
///
/// Inverted extents (e.g. `top < bottom` for a Y-down layout) are accepted;
/// only empty extents are rejected.
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<Mat4> {
    check_box("orthographic", left, right, bottom, top, near, far)?;
    Ok(Mat4::orthographic_rh_gl(left, right, bottom, top, near, far))
}

/// Symmetric perspective projection.
///
/// Preconditions: `0 < fov_y < π`, `aspect > 0`, `0 < near < far`.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Mat4> {
    check_finite("perspective", &[fov_y, aspect, near, far])?;
    check_fov("perspective", fov_y, aspect)?;
    if !(near > 0.0 && far > near) {
        camera_bail!(Error::InvalidArgument, SOURCE,
            "perspective: requires 0 < near < far, got near = {}, far = {}", near, far);
    }
    Ok(Mat4::perspective_rh_gl(fov_y, aspect, near, far))
}

/// Asymmetric (off-axis) perspective projection, `glFrustum` layout.
///
/// The extents describe the near plane. Preconditions: `0 < near < far`.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Result<Mat4> {
    check_box("frustum", left, right, bottom, top, near, far)?;
    if !(near > 0.0 && far > near) {
        camera_bail!(Error::InvalidArgument, SOURCE,
            "frustum: requires 0 < near < far, got near = {}, far = {}", near, far);
    }
    let width = right - left;
    let height = top - bottom;
    let depth = far - near;
    Ok(Mat4::from_cols(
        Vec4::new(2.0 * near / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * near / height, 0.0, 0.0),
        Vec4::new((right + left) / width, (top + bottom) / height, -(far + near) / depth, -1.0),
        Vec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
    ))
}

/// Perspective projection with the far plane at infinity.
///
/// Preconditions: `0 < fov_y < π`, `aspect > 0`, `near > 0`.
pub fn infinite_perspective(fov_y: f32, aspect: f32, near: f32) -> Result<Mat4> {
    check_finite("infinite_perspective", &[fov_y, aspect, near])?;
    check_fov("infinite_perspective", fov_y, aspect)?;
    if !(near > 0.0) {
        camera_bail!(Error::InvalidArgument, SOURCE,
            "infinite_perspective: near must be positive, got {}", near);
    }
    let f = 1.0 / (0.5 * fov_y).tan();
    Ok(Mat4::from_cols(
        Vec4::new(f / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -1.0, -1.0),
        Vec4::new(0.0, 0.0, -2.0 * near, 0.0),
    ))
}

// ===== PROJECTION KINDS =====

/// Parameters of an orthographic camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicParams {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthographicParams {
    /// Centered box of the given height, width derived from `aspect`.
    pub fn from_height(height: f32, aspect: f32, near: f32, far: f32) -> Self {
        let half_h = 0.5 * height;
        let half_w = half_h * aspect;
        Self {
            left: -half_w,
            right: half_w,
            bottom: -half_h,
            top: half_h,
            near,
            far,
        }
    }

    /// Keep the vertical extent and the box center, rescale the horizontal
    /// extent to `aspect`. The orientation of both axes is preserved.
    pub fn with_aspect(&self, aspect: f32) -> Self {
        let center_x = 0.5 * (self.left + self.right);
        let height = (self.top - self.bottom).abs();
        let half_w = 0.5 * height * aspect * (self.right - self.left).signum();
        Self {
            left: center_x - half_w,
            right: center_x + half_w,
            ..*self
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        (self.right - self.left).abs()
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        (self.top - self.bottom).abs()
    }

    pub fn to_matrix(&self) -> Result<Mat4> {
        orthographic(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }
}

/// Parameters of a perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveParams {
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveParams {
    pub fn to_matrix(&self) -> Result<Mat4> {
        perspective(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Discriminant of [`Projection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    Orthographic,
    Perspective,
    Fixed,
}

/// Projection owned by a camera.
///
/// `Fixed` holds an explicit matrix supplied by the caller; it is never
/// rebuilt on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Orthographic(OrthographicParams),
    Perspective(PerspectiveParams),
    Fixed(Mat4),
}

impl Projection {
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Projection::Orthographic(_) => ProjectionKind::Orthographic,
            Projection::Perspective(_) => ProjectionKind::Perspective,
            Projection::Fixed(_) => ProjectionKind::Fixed,
        }
    }

    /// Build the matrix for these parameters.
    pub fn to_matrix(&self) -> Result<Mat4> {
        match self {
            Projection::Orthographic(params) => params.to_matrix(),
            Projection::Perspective(params) => params.to_matrix(),
            Projection::Fixed(matrix) => Ok(*matrix),
        }
    }

    /// Same projection adapted to a new aspect ratio.
    pub fn with_aspect(&self, aspect: f32) -> Self {
        match self {
            Projection::Orthographic(params) => Projection::Orthographic(params.with_aspect(aspect)),
            Projection::Perspective(params) => Projection::Perspective(PerspectiveParams { aspect, ..*params }),
            Projection::Fixed(matrix) => Projection::Fixed(*matrix),
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;

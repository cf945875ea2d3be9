/// Camera state with its drag anchor and projection.
///
/// The camera owns the current eye/center/up, a snapshot of them taken when a
/// gesture starts (the anchor), and a projection described by kind + parameters.
/// Gesture mutations are computed from the anchor, so a long drag never
/// accumulates per-event error and replaying the same cursor path always lands
/// on the same view.
///
/// Every mutation driven by input is a silent no-op when its input (or its
/// result) contains NaN/Inf; the skip is logged at DEBUG.
///
/// Invariants held after every mutation:
/// - `eye != center`
/// - `up` is unit length and orthogonal to `eye - center`

use glam::{Mat4, Quat, Vec2, Vec3};
use crate::backend::{ContextGuard, MatrixMode, RenderBackend};
use crate::error::{Error, Result};
use crate::math::{reorthogonalize_up, rotate_about_axis, Validate};
use crate::project::{project, unproject};
use crate::projection::{OrthographicParams, Projection, ProjectionKind};
use crate::view::usable_up;
use crate::viewport::Viewport;
use crate::{camera_bail, camera_debug, camera_trace};
use super::config::CameraConfig;
use super::frustum::Frustum;

const SOURCE: &str = "camera3d::Camera";

/// Orbit/pan/zoom camera parameterized by its projection kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    projection: Projection,
    projection_matrix: Mat4,
    eye: Vec3,
    center: Vec3,
    up: Vec3,
    anchor_eye: Vec3,
    anchor_center: Vec3,
    anchor_up: Vec3,
    viewport: Viewport,
    config: CameraConfig,
}

impl Camera {
    /// Create a camera from eye/center/up and a projection.
    ///
    /// `up` only needs to be roughly up: it is re-orthogonalized against the
    /// view direction (or replaced by a world axis when parallel to it).
    /// Orthographic and perspective projections are adapted to the viewport's
    /// aspect ratio; a `Fixed` matrix is used as given.
    ///
    /// # Errors
    ///
    /// - `Error::DegenerateGeometry` if `eye == center` or a vector is not finite
    /// - `Error::InvalidArgument` if the viewport or projection parameters are invalid
    pub fn new(
        eye: Vec3,
        center: Vec3,
        up: Vec3,
        projection: Projection,
        viewport: Viewport,
        config: CameraConfig,
    ) -> Result<Self> {
        if !eye.is_valid() || !center.is_valid() || (eye - center).length_squared() == 0.0 {
            camera_bail!(Error::DegenerateGeometry, SOURCE,
                "eye {:?} and center {:?} do not define a view direction", eye, center);
        }
        let view_axis = eye - center;
        let up = reorthogonalize_up(view_axis, usable_up(-view_axis, up));

        let projection = match projection {
            Projection::Fixed(_) => projection,
            _ => projection.with_aspect(viewport.aspect()?),
        };
        let projection_matrix = projection.to_matrix()?;

        Ok(Self {
            projection,
            projection_matrix,
            eye,
            center,
            up,
            anchor_eye: eye,
            anchor_center: center,
            anchor_up: up,
            viewport,
            config,
        })
    }

    /// Create a camera with an explicit projection matrix.
    pub fn with_matrix(
        eye: Vec3,
        center: Vec3,
        up: Vec3,
        projection: Mat4,
        viewport: Viewport,
        config: CameraConfig,
    ) -> Result<Self> {
        if !projection.is_valid() {
            camera_bail!(Error::InvalidArgument, SOURCE, "projection matrix is not finite");
        }
        Self::new(eye, center, up, Projection::Fixed(projection), viewport, config)
    }

    // ===== GETTERS =====

    /// Camera position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at target.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Up direction (unit, orthogonal to `eye - center`).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Eye at gesture start.
    pub fn anchor_eye(&self) -> Vec3 {
        self.anchor_eye
    }

    /// Center at gesture start.
    pub fn anchor_center(&self) -> Vec3 {
        self.anchor_center
    }

    /// Up at gesture start.
    pub fn anchor_up(&self) -> Vec3 {
        self.anchor_up
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn projection_kind(&self) -> ProjectionKind {
        self.projection.kind()
    }

    /// Projection matrix (rebuilt on resize and orthographic zoom).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// View matrix derived from the current eye/center/up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }

    /// View matrix of the anchor snapshot.
    pub fn anchor_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.anchor_eye, self.anchor_center, self.anchor_up)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }

    /// Frustum planes of the current view.
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection_matrix())
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CameraConfig) {
        self.config = config;
    }

    // ===== GESTURE ANCHOR =====

    /// Snapshot eye/center/up as the reference for the next gesture.
    pub fn begin_gesture(&mut self) {
        self.anchor_eye = self.eye;
        self.anchor_center = self.center;
        self.anchor_up = self.up;
        camera_trace!(SOURCE, "gesture anchored at eye {:?}, center {:?}", self.eye, self.center);
    }

    // ===== MUTATIONS =====

    /// Translate eye and center by `delta`.
    ///
    /// With `from_anchor`, the result is `anchor + delta` (drag semantics: each
    /// event replaces the previous one). Otherwise `delta` is added to the
    /// current state. No-op when `delta` is not finite.
    pub fn move_by(&mut self, delta: Vec3, from_anchor: bool) {
        if !delta.is_valid() {
            camera_debug!(SOURCE, "move skipped: delta {:?} is not finite", delta);
            return;
        }
        let (eye, center) = if from_anchor {
            (self.anchor_eye + delta, self.anchor_center + delta)
        } else {
            (self.eye + delta, self.center + delta)
        };
        if !eye.is_valid() || !center.is_valid() || eye == center {
            camera_debug!(SOURCE, "move skipped: result eye {:?}, center {:?} is degenerate", eye, center);
            return;
        }
        if from_anchor {
            self.up = self.anchor_up;
        }
        self.eye = eye;
        self.center = center;
    }

    /// Orbit the anchor eye about `axis` through the anchor center by `angle` radians.
    ///
    /// Always computed from the anchor, never from the current eye. `up` is the
    /// rotated anchor up, re-orthogonalized against the new view axis.
    /// No-op when `axis` is zero/not finite or `angle` is not finite.
    pub fn rotate(&mut self, axis: Vec3, angle: f32) {
        let axis = axis.normalize();
        if !axis.is_valid() || !angle.is_valid() {
            camera_debug!(SOURCE, "rotate skipped: axis {:?}, angle {} is not usable", axis, angle);
            return;
        }
        let rotation = Quat::from_axis_angle(axis, angle);
        let offset = rotation * (self.anchor_eye - self.anchor_center);
        let up = reorthogonalize_up(offset, rotation * self.anchor_up);
        let eye = self.anchor_center + offset;
        if !eye.is_valid() || !up.is_valid() || offset.length_squared() == 0.0 {
            camera_debug!(SOURCE, "rotate skipped: result eye {:?}, up {:?} is degenerate", eye, up);
            return;
        }
        self.eye = eye;
        self.center = self.anchor_center;
        self.up = up;
    }

    /// Roll: rotate the anchor up about the current view axis by `angle` radians.
    ///
    /// No-op when `angle` is not finite.
    pub fn roll(&mut self, angle: f32) {
        if !angle.is_valid() {
            camera_debug!(SOURCE, "roll skipped: angle {} is not finite", angle);
            return;
        }
        let view_axis = self.eye - self.center;
        let up = reorthogonalize_up(view_axis, rotate_about_axis(self.anchor_up, view_axis, angle));
        if !up.is_valid() {
            camera_debug!(SOURCE, "roll skipped: up {:?} is degenerate", up);
            return;
        }
        self.up = up;
    }

    /// Zoom by `delta` wheel units with the cursor at `cursor` (pixels, origin top-left).
    ///
    /// - Orthographic: the view box shrinks (positive delta) or grows, each edge
    ///   moving in proportion to the cursor's closeness to it, and the
    ///   projection matrix is rebuilt.
    /// - Perspective / fixed: the eye dollies along `eye - center`, clamped to
    ///   `[min_distance, max_distance]`; the anchor eye is scaled alike so an
    ///   ongoing drag keeps the new distance.
    ///
    /// No-op when inputs are not finite or the result would be degenerate.
    pub fn zoom(&mut self, delta: f32, cursor: Vec2) {
        if !delta.is_valid() || !cursor.is_valid() {
            camera_debug!(SOURCE, "zoom skipped: delta {}, cursor {:?} is not finite", delta, cursor);
            return;
        }
        let amount = delta * self.config.zoom_speed;
        match self.projection {
            Projection::Orthographic(params) => self.zoom_orthographic(params, amount, cursor),
            Projection::Perspective(_) | Projection::Fixed(_) => self.dolly(amount),
        }
    }

    fn zoom_orthographic(&mut self, params: OrthographicParams, amount: f32, cursor: Vec2) {
        let fx = (cursor.x / self.viewport.width).clamp(0.0, 1.0);
        let fy = (cursor.y / self.viewport.height).clamp(0.0, 1.0);
        let span_x = params.right - params.left;
        let span_y = params.top - params.bottom;

        let zoomed = OrthographicParams {
            left: params.left + span_x * amount * (1.0 - fx),
            right: params.right - span_x * amount * fx,
            bottom: params.bottom + span_y * amount * fy,
            top: params.top - span_y * amount * (1.0 - fy),
            ..params
        };

        let new_span_x = zoomed.right - zoomed.left;
        let new_span_y = zoomed.top - zoomed.bottom;
        let keeps_orientation = new_span_x.signum() == span_x.signum()
            && new_span_y.signum() == span_y.signum();
        if !keeps_orientation
            || zoomed.width() < self.config.min_extent
            || zoomed.height() < self.config.min_extent
        {
            camera_debug!(SOURCE, "zoom skipped: extents {:?} out of range", zoomed);
            return;
        }
        match zoomed.to_matrix() {
            Ok(matrix) => {
                self.projection = Projection::Orthographic(zoomed);
                self.projection_matrix = matrix;
            }
            Err(err) => camera_debug!(SOURCE, "zoom skipped: {}", err),
        }
    }

    fn dolly(&mut self, amount: f32) {
        let factor = 1.0 - amount;
        let offset = self.eye - self.center;
        let length = offset.length();
        if !(factor > 0.0) || length == 0.0 {
            camera_debug!(SOURCE, "zoom skipped: scale factor {} is not positive", factor);
            return;
        }
        let distance = (length * factor).clamp(self.config.min_distance, self.config.max_distance);
        let ratio = distance / length;
        let eye = self.center + offset * ratio;
        let anchor_eye = self.anchor_center + (self.anchor_eye - self.anchor_center) * ratio;
        if !eye.is_valid() || !anchor_eye.is_valid() || eye == self.center {
            camera_debug!(SOURCE, "zoom skipped: result eye {:?} is degenerate", eye);
            return;
        }
        self.eye = eye;
        self.anchor_eye = anchor_eye;
    }

    /// Adapt to a new viewport size, rebuilding the projection for the new aspect ratio.
    ///
    /// Orthographic boxes keep their height and center; perspective cameras
    /// keep their field of view. A fixed matrix is left untouched.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `width` or `height` is not strictly positive.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<()> {
        let viewport = Viewport { width, height, ..self.viewport };
        let aspect = viewport.aspect()?;
        let projection = self.projection.with_aspect(aspect);
        let projection_matrix = projection.to_matrix()?;
        self.viewport = viewport;
        self.projection = projection;
        self.projection_matrix = projection_matrix;
        Ok(())
    }

    // ===== SCREEN MAPPING =====

    /// World point → window coordinates (origin bottom-left, depth in the viewport range).
    pub fn project(&self, world: Vec3) -> Result<Vec3> {
        project(world, &self.view_matrix(), &self.projection_matrix, &self.viewport)
    }

    /// Window coordinates (with depth) → world point.
    pub fn unproject(&self, window: Vec3) -> Result<Vec3> {
        unproject(window, &self.view_matrix(), &self.projection_matrix, &self.viewport)
    }

    // ===== FRAME COMMIT =====

    /// Load the projection and view matrices into `backend` before draw calls.
    ///
    /// The backend context is current for the duration of the call and released
    /// on every exit path.
    pub fn apply(&self, backend: &mut dyn RenderBackend) -> Result<()> {
        let mut guard = ContextGuard::acquire(backend)?;
        guard.load_matrix(MatrixMode::Projection, &self.projection_matrix)?;
        guard.load_matrix(MatrixMode::View, &self.view_matrix())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

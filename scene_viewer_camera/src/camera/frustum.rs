/// Frustum: the six clipping planes of a camera's view volume.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Lets a viewer skip geometry the current camera cannot see.

use glam::{Mat4, Vec3, Vec4};
use crate::error::{Error, Result};

/// Result of a 3-way frustum/sphere classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Sphere is entirely outside the frustum
    Outside,
    /// Sphere is entirely inside the frustum
    Inside,
    /// Sphere straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann method for OpenGL clip space (z in [-w, w]).
    /// Works for both perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let mut planes = [
            row3 + row0,
            row3 - row0,
            row3 + row1,
            row3 - row1,
            row3 + row2,
            row3 - row2,
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` when `index` is not one of the `PLANE_*` indices.
    pub fn distance(&self, index: usize, point: Vec3) -> Result<f32> {
        match self.planes.get(index) {
            Some(plane) => Ok(signed_distance(plane, point)),
            None => Err(Error::IndexOutOfRange { index, len: self.planes.len() }),
        }
    }

    /// Whether `point` lies inside (or on the boundary of) the frustum.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| signed_distance(plane, point) >= 0.0)
    }

    /// Classify a bounding sphere against the frustum.
    pub fn classify_sphere(&self, center: Vec3, radius: f32) -> FrustumTest {
        let mut all_inside = true;
        for plane in &self.planes {
            let d = signed_distance(plane, center);
            if d < -radius {
                return FrustumTest::Outside;
            }
            if d < radius {
                all_inside = false;
            }
        }
        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

fn signed_distance(plane: &Vec4, point: Vec3) -> f32 {
    plane.truncate().dot(point) + plane.w
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

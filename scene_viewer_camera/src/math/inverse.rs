//! Guarded matrix inversion.
//!
//! glam inverts with the adjugate (cofactor) method for general matrices,
//! which is what projection matrices need: they are not orthonormal and
//! unprojection relies on their exact inverse. glam divides by the
//! determinant without checking it, so singular input is rejected here.

use glam::{Mat3, Mat4};
use crate::camera_bail;
use crate::error::{Error, Result};
use super::Validate;

const SOURCE: &str = "camera3d::math";

/// Inversion that reports singular matrices instead of producing NaN/Inf
pub trait TryInverse: Sized {
    /// Inverse of `self`, or `Error::SingularMatrix` when the determinant is
    /// zero/non-finite or the computed inverse is not finite.
    fn try_inverse(&self) -> Result<Self>;
}

impl TryInverse for Mat3 {
    fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            camera_bail!(Error::SingularMatrix, SOURCE, "3x3 determinant is {}", det);
        }
        let inverse = self.inverse();
        if !inverse.is_valid() {
            camera_bail!(Error::SingularMatrix, SOURCE, "3x3 inverse is not finite");
        }
        Ok(inverse)
    }
}

impl TryInverse for Mat4 {
    fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            camera_bail!(Error::SingularMatrix, SOURCE, "4x4 determinant is {}", det);
        }
        let inverse = self.inverse();
        if !inverse.is_valid() {
            camera_bail!(Error::SingularMatrix, SOURCE, "4x4 inverse is not finite");
        }
        Ok(inverse)
    }
}

//! NaN/Inf validity checks.
//!
//! Gesture-driven camera mutations are skipped when their inputs fail
//! these checks, so a glitchy input device can never poison camera state.

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

/// Types whose every component can be checked for NaN and ±∞
pub trait Validate {
    /// `false` if any component is NaN or infinite
    fn is_valid(&self) -> bool;
}

impl Validate for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validate for Vec2 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validate for Vec3 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validate for Vec4 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validate for Mat2 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validate for Mat3 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validate for Mat4 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

//! Checked indexed access.
//!
//! glam's `Index` impls panic on a bad index; these return
//! `Error::IndexOutOfRange` instead.

use glam::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};
use crate::error::{Error, Result};

/// Checked component access for vectors
pub trait ComponentAccess {
    /// Number of components
    const LEN: usize;

    /// Component at `index`
    fn component(&self, index: usize) -> Result<f32>;

    /// Overwrite the component at `index`
    fn set_component(&mut self, index: usize, value: f32) -> Result<()>;
}

macro_rules! impl_component_access {
    ($ty:ty, $len:expr) => {
        impl ComponentAccess for $ty {
            const LEN: usize = $len;

            fn component(&self, index: usize) -> Result<f32> {
                if index >= Self::LEN {
                    return Err(Error::IndexOutOfRange { index, len: Self::LEN });
                }
                Ok(self[index])
            }

            fn set_component(&mut self, index: usize, value: f32) -> Result<()> {
                if index >= Self::LEN {
                    return Err(Error::IndexOutOfRange { index, len: Self::LEN });
                }
                self[index] = value;
                Ok(())
            }
        }
    };
}

impl_component_access!(Vec2, 2);
impl_component_access!(Vec3, 3);
impl_component_access!(Vec4, 4);

/// Checked column/element access for column-major matrices
pub trait MatrixAccess {
    /// Column vector type
    type Column;

    /// Number of columns (and rows)
    const DIM: usize;

    /// Column `index`
    fn column(&self, index: usize) -> Result<Self::Column>;

    /// Element at (`col`, `row`)
    fn element(&self, col: usize, row: usize) -> Result<f32>;
}

impl MatrixAccess for Mat2 {
    type Column = Vec2;
    const DIM: usize = 2;

    fn column(&self, index: usize) -> Result<Vec2> {
        if index >= Self::DIM {
            return Err(Error::IndexOutOfRange { index, len: Self::DIM });
        }
        Ok(self.col(index))
    }

    fn element(&self, col: usize, row: usize) -> Result<f32> {
        self.column(col)?.component(row)
    }
}

impl MatrixAccess for Mat3 {
    type Column = Vec3;
    const DIM: usize = 3;

    fn column(&self, index: usize) -> Result<Vec3> {
        if index >= Self::DIM {
            return Err(Error::IndexOutOfRange { index, len: Self::DIM });
        }
        Ok(self.col(index))
    }

    fn element(&self, col: usize, row: usize) -> Result<f32> {
        self.column(col)?.component(row)
    }
}

impl MatrixAccess for Mat4 {
    type Column = Vec4;
    const DIM: usize = 4;

    fn column(&self, index: usize) -> Result<Vec4> {
        if index >= Self::DIM {
            return Err(Error::IndexOutOfRange { index, len: Self::DIM });
        }
        Ok(self.col(index))
    }

    fn element(&self, col: usize, row: usize) -> Result<f32> {
        self.column(col)?.component(row)
    }
}

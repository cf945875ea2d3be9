/// Rendering backend boundary.
///
/// The camera only needs two things from the GPU side: make the rendering
/// context current, and load a matrix before draw calls are issued. Everything
/// else a backend does (buffers, textures, shaders, draws) lives outside this crate.

use glam::Mat4;
use crate::error::Result;

/// Which matrix slot a `load_matrix` call targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    /// Camera space → clip space
    Projection,
    /// World space → camera space
    View,
}

/// Backend receiving the camera matrices once per frame
///
/// Implementations wrap whatever native API owns the context (OpenGL, Vulkan
/// push constants, a software rasterizer, ...). Calls happen on the thread
/// that owns the context; the camera does not manage context affinity.
pub trait RenderBackend {
    /// Make this backend's context current on the calling thread
    fn make_current(&mut self) -> Result<()>;

    /// Release the context made current by `make_current`
    fn release_current(&mut self);

    /// Load a 4x4 column-major `f32` matrix (64 bytes) into `mode`'s slot
    fn load_matrix(&mut self, mode: MatrixMode, data: &[u8]) -> Result<()>;
}

/// Scoped context activation.
///
/// `acquire` makes the context current; dropping the guard releases it on
/// every exit path, including early returns through `?`.
pub struct ContextGuard<'a> {
    backend: &'a mut dyn RenderBackend,
}

impl<'a> ContextGuard<'a> {
    /// Make `backend`'s context current for the guard's lifetime
    ///
    /// # Errors
    ///
    /// Propagates the backend's `make_current` failure; nothing is released
    /// in that case because nothing was acquired.
    pub fn acquire(backend: &'a mut dyn RenderBackend) -> Result<Self> {
        backend.make_current()?;
        Ok(Self { backend })
    }

    /// Upload `matrix` into `mode`'s slot
    pub fn load_matrix(&mut self, mode: MatrixMode, matrix: &Mat4) -> Result<()> {
        self.backend.load_matrix(mode, bytemuck::bytes_of(matrix))
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        self.backend.release_current();
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;

/*!
# Scene Viewer Camera

Camera transforms and projection matrices for interactive 3D viewers.

The crate turns already-extracted pointer/keyboard input into camera motion
(orbit, roll, pan, zoom) and produces the projection and view matrices a
rendering backend loads once per frame. Conventions are OpenGL's:
right-handed view space, +Y up, camera looking down −Z, clip depth in [-1, 1].

## Architecture

- **math**: validity checks, checked component access and guarded inversion on top of `glam`
- **projection**: orthographic / perspective / off-axis / infinite projection builders
- **view**: `look_at` view matrix
- **arcball**: cursor → hemisphere mapping and drag → orbit/roll gestures
- **project**: world ↔ window coordinate mapping
- **camera**: the `Camera` state machine, `CameraController` and `Frustum`
- **backend**: `RenderBackend` trait and scoped context activation

Everything public is re-exported under [`camera3d`].
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod projection;
pub mod view;
pub mod arcball;
pub mod project;
pub mod viewport;
pub mod input;
pub mod backend;
pub mod camera;

// Main camera3d namespace module
pub mod camera3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera state machine and input
    pub use crate::camera::{Camera, CameraConfig, CameraController, GestureState, Frustum, FrustumTest};
    pub use crate::input::{InputEvent, Modifiers, PointerButton};
    pub use crate::viewport::{Viewport, ViewportSize};

    // Matrix builders and screen mapping
    pub use crate::projection::{
        frustum, infinite_perspective, orthographic, perspective,
        OrthographicParams, PerspectiveParams, Projection, ProjectionKind,
    };
    pub use crate::view::look_at;
    pub use crate::arcball::{arcball_vector, map_drag, orbit, roll_angle, ArcballGesture};
    pub use crate::project::{project, unproject};

    // Math extensions
    pub use crate::math::{ComponentAccess, MatrixAccess, TryInverse, Validate};

    // Backend boundary
    pub use crate::backend::{ContextGuard, MatrixMode, RenderBackend};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, Log};
    }
}

// Re-export math library at crate root
pub use glam;

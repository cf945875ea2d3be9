//! Camera state machine plus the input controller that drives it.
//!
//! `Camera` is pure data + math: it holds no GPU resources and never talks
//! to the window system. `CameraController` is the piece the host feeds
//! input events into.

mod camera;
mod config;
mod controller;
mod frustum;

pub use camera::Camera;
pub use config::CameraConfig;
pub use controller::{CameraController, GestureState};
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};

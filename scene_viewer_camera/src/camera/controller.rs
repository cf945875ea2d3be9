/// Camera controller: turns host input events into camera gestures.
///
/// The host owns the event loop and pushes [`InputEvent`]s in; the controller
/// tracks the gesture session (which button started the drag and where) and
/// drives the [`Camera`] with drag-from-anchor semantics:
///
/// - orbit button: arcball orbit, or roll about the view axis with Shift held
/// - pan button (and middle button): translate so the point under the cursor follows it
/// - wheel: zoom toward the cursor
///
/// A drag starts when a button is pressed, or when a move reports a different
/// button than the one that started the current drag. It ends on release or
/// when a move reports no button.

use glam::{Vec2, Vec3};
use crate::arcball::{arcball_vector, map_drag, ArcballGesture};
use crate::backend::RenderBackend;
use crate::error::Result;
use crate::input::{InputEvent, Modifiers, PointerButton};
use crate::math::Validate;
use crate::project::{project, unproject};
use crate::viewport::ViewportSize;
use crate::{camera_debug, camera_trace};
use super::camera::Camera;

const SOURCE: &str = "camera3d::CameraController";

/// Arcball vectors closer than this are the same cursor point
const SAME_POINT_EPSILON: f32 = 1.0e-6;

/// Gesture session state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No button held
    #[default]
    Idle,
    /// A drag started by `button` at cursor position `start`
    Dragging { button: PointerButton, start: Vec2 },
}

/// Input-driven wrapper around a [`Camera`].
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: Camera,
    state: GestureState,
}

impl CameraController {
    pub fn new(camera: Camera) -> Self {
        Self { camera, state: GestureState::Idle }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Dispatch one host event.
    ///
    /// Only a resize can fail; pointer and wheel events never return an error
    /// (unusable input is skipped and logged at DEBUG).
    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::PointerDown { position, button, modifiers } => {
                self.pointer_down(position, button, modifiers);
            }
            InputEvent::PointerMove { position, button, modifiers } => {
                self.pointer_move(position, button, modifiers);
            }
            InputEvent::PointerUp { position, button } => self.pointer_up(position, button),
            InputEvent::Wheel { delta, position } => self.wheel(delta, position),
            InputEvent::Resize(size) => self.resize(size)?,
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, position: Vec2, button: PointerButton, _modifiers: Modifiers) {
        if button == PointerButton::None {
            return;
        }
        self.start_gesture(button, position);
    }

    pub fn pointer_move(&mut self, position: Vec2, button: PointerButton, modifiers: Modifiers) {
        if button == PointerButton::None {
            self.end_gesture();
            return;
        }
        match self.state {
            GestureState::Dragging { button: held, start } if held == button => {
                self.drag(start, position, button, modifiers);
            }
            _ => self.start_gesture(button, position),
        }
    }

    pub fn pointer_up(&mut self, _position: Vec2, button: PointerButton) {
        if let GestureState::Dragging { button: held, .. } = self.state {
            if held == button || button == PointerButton::None {
                self.end_gesture();
            }
        }
    }

    /// Zoom by `delta` wheel units toward `position`.
    pub fn wheel(&mut self, delta: i32, position: Vec2) {
        self.camera.zoom(delta as f32, position);
    }

    pub fn resize(&mut self, size: ViewportSize) -> Result<()> {
        self.camera.resize(size.width, size.height)
    }

    /// End any gesture and make the current view the new anchor.
    pub fn commit(&mut self) {
        self.end_gesture();
        self.camera.begin_gesture();
    }

    /// Load the camera matrices into `backend` for the coming frame.
    pub fn apply(&self, backend: &mut dyn RenderBackend) -> Result<()> {
        self.camera.apply(backend)
    }

    // ===== GESTURES =====

    fn start_gesture(&mut self, button: PointerButton, start: Vec2) {
        self.camera.begin_gesture();
        self.state = GestureState::Dragging { button, start };
        camera_trace!(SOURCE, "{:?} drag started at {:?}", button, start);
    }

    fn end_gesture(&mut self) {
        if self.state != GestureState::Idle {
            camera_trace!(SOURCE, "drag ended");
        }
        self.state = GestureState::Idle;
    }

    fn drag(&mut self, start: Vec2, current: Vec2, button: PointerButton, modifiers: Modifiers) {
        let config = *self.camera.config();
        if button == config.orbit_button {
            self.arcball(start, current, modifiers.contains(Modifiers::SHIFT));
        } else if config.is_pan_button(button) {
            self.pan(start, current);
        }
    }

    fn arcball(&mut self, start: Vec2, current: Vec2, roll_mode: bool) {
        let size = self.camera.viewport().size();
        let from = arcball_vector(start, size.x, size.y);
        let to = arcball_vector(current, size.x, size.y);
        if !from.is_valid() || !to.is_valid() {
            camera_debug!(SOURCE, "arcball skipped: cursor {:?} -> {:?} in viewport {:?}", start, current, size);
            return;
        }

        let gesture = map_drag(
            from,
            to,
            roll_mode,
            self.camera.anchor_eye(),
            self.camera.anchor_center(),
            self.camera.anchor_up(),
            self.camera.config().rotation_speed,
        );
        match gesture {
            Some(ArcballGesture::Roll { angle }) => self.camera.roll(angle),
            // Cursor back on its start point: back to the anchor
            Some(ArcballGesture::Orbit { .. }) if from.abs_diff_eq(to, SAME_POINT_EPSILON) => {
                self.camera.move_by(Vec3::ZERO, true);
            }
            // Opposite vectors give a zero axis, which `rotate` skips
            Some(ArcballGesture::Orbit { axis, angle }) => self.camera.rotate(axis, angle),
            None => camera_debug!(SOURCE, "arcball skipped: anchor does not define a view"),
        }
    }

    /// Translate so the world point under `start` (at the anchor center's
    /// depth) ends up under `current`.
    fn pan(&mut self, start: Vec2, current: Vec2) {
        let viewport = *self.camera.viewport();
        let view = self.camera.anchor_view_matrix();
        let projection = *self.camera.projection_matrix();

        let depth = match project(self.camera.anchor_center(), &view, &projection, &viewport) {
            Ok(window) => window.z,
            Err(err) => {
                camera_debug!(SOURCE, "pan skipped: {}", err);
                return;
            }
        };
        let from = viewport.cursor_to_window(start).extend(depth);
        let to = viewport.cursor_to_window(current).extend(depth);

        let delta = unproject(from, &view, &projection, &viewport)
            .and_then(|a| Ok(a - unproject(to, &view, &projection, &viewport)?));
        match delta {
            Ok(delta) => {
                let speed = self.camera.config().movement_speed;
                self.camera.move_by(delta * speed, true);
            }
            Err(err) => camera_debug!(SOURCE, "pan skipped: {}", err),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;

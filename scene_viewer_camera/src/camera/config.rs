/// Camera tuning parameters.

use crate::input::PointerButton;

/// Speeds, limits and button bindings used by `Camera` and `CameraController`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Multiplier applied to the arcball orbit angle
    pub rotation_speed: f32,
    /// Multiplier applied to pan translations
    pub movement_speed: f32,
    /// Fraction of the view zoomed per wheel unit
    pub zoom_speed: f32,
    /// Closest the eye may get to the center when dollying (perspective)
    pub min_distance: f32,
    /// Farthest the eye may get from the center when dollying (perspective)
    pub max_distance: f32,
    /// Smallest orthographic extent a zoom may produce
    pub min_extent: f32,
    /// Button that orbits (or rolls with Shift)
    pub orbit_button: PointerButton,
    /// Button that pans; the middle button always pans unless it orbits
    pub pan_button: PointerButton,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 1.0,
            movement_speed: 1.0,
            zoom_speed: 0.001,
            min_distance: 0.01,
            max_distance: 10_000.0,
            min_extent: 1.0e-4,
            orbit_button: PointerButton::Left,
            pan_button: PointerButton::Right,
        }
    }
}

impl CameraConfig {
    /// Whether `button` drives a pan gesture
    pub fn is_pan_button(&self, button: PointerButton) -> bool {
        button != PointerButton::None
            && button != self.orbit_button
            && (button == self.pan_button || button == PointerButton::Middle)
    }
}

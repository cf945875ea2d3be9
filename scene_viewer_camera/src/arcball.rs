//! Arcball / orbit gesture mapping.
//!
//! Cursor positions are lifted onto a virtual unit hemisphere facing the
//! viewer; a drag between two such points becomes either a roll about the
//! view axis (Shift held) or an orbit about an arbitrary world axis.

use glam::{Vec2, Vec3};
use crate::math::wrap_angle;
use crate::view::view_to_world;

/// Camera motion derived from one arcball drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcballGesture {
    /// Rotate `up` about the view axis (`eye - center`) by `angle` radians
    Roll { angle: f32 },
    /// Rotate the eye about the world-space `axis` through the center by `angle` radians
    Orbit { axis: Vec3, angle: f32 },
}

/// Map a cursor position (pixels, origin top-left) onto the arcball hemisphere.
///
/// Inside the unit disk the point is lifted to `z = sqrt(1 - x² - y²)`; outside
/// it is projected onto the disk edge (`z = 0`). The result is always unit length
/// for a non-empty viewport; an empty viewport yields a non-finite vector, which
/// gesture consumers ignore.
pub fn arcball_vector(cursor: Vec2, width: f32, height: f32) -> Vec3 {
    let x = 2.0 * cursor.x / width - 1.0;
    let y = -(2.0 * cursor.y / height - 1.0);
    let d2 = x * x + y * y;
    let z = if d2 <= 1.0 { (1.0 - d2).sqrt() } else { 0.0 };
    Vec3::new(x, y, z).normalize()
}

/// Signed roll angle between two arcball vectors, wrapped into (-π, π].
///
/// Measured from screen +Y toward +X, so a clockwise drag gives a positive angle.
pub fn roll_angle(from: Vec3, to: Vec3) -> f32 {
    wrap_angle(to.x.atan2(to.y) - from.x.atan2(from.y))
}

/// Orbit rotation that makes the scene follow a drag from `from` to `to`.
///
/// The arcball vectors are view-space directions of the camera described by
/// the anchor (gesture start) eye/center/up. The returned axis is in world space
/// and the angle is the camera's rotation (the inverse of the scene's), scaled by
/// `rotation_speed`. Identical vectors produce a zero axis, which the camera
/// rejects as invalid. `None` when the anchor cannot define a view.
pub fn orbit(
    from: Vec3,
    to: Vec3,
    anchor_eye: Vec3,
    anchor_center: Vec3,
    anchor_up: Vec3,
    rotation_speed: f32,
) -> Option<ArcballGesture> {
    let to_world = view_to_world(anchor_eye, anchor_center, anchor_up).ok()?;
    let from_world = to_world.transform_vector3(from);
    let to_world_vec = to_world.transform_vector3(to);
    let axis = from_world.cross(to_world_vec);
    let angle = from.angle_between(to) * rotation_speed;
    Some(ArcballGesture::Orbit { axis, angle: -angle })
}

/// Full drag mapping: roll when `roll_mode` (Shift) is set, orbit otherwise.
pub fn map_drag(
    start: Vec3,
    current: Vec3,
    roll_mode: bool,
    anchor_eye: Vec3,
    anchor_center: Vec3,
    anchor_up: Vec3,
    rotation_speed: f32,
) -> Option<ArcballGesture> {
    if roll_mode {
        Some(ArcballGesture::Roll { angle: roll_angle(start, current) })
    } else {
        orbit(start, current, anchor_eye, anchor_center, anchor_up, rotation_speed)
    }
}

#[cfg(test)]
#[path = "arcball_tests.rs"]
mod tests;

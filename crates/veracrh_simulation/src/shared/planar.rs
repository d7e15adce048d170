//! Planar (XZ) geometry helpers.
//!
//! Вся логика боя живёт в плоскости движения: Y обнуляется перед расчётом
//! дистанций и направлений. Forward = -Z (конвенция Bevy).

use bevy::prelude::*;

/// Направления короче этого (в квадрате) считаются нулевыми.
pub const MIN_DIRECTION_SQR: f32 = 0.0001;

/// Project a vector onto the movement plane.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Distance between two points measured in the movement plane.
pub fn planar_distance(from: Vec3, to: Vec3) -> f32 {
    flatten(to - from).length()
}

/// Yaw-only orientation whose forward (-Z) points along `direction`.
///
/// Returns `None` for (near) zero planar directions: caller keeps current facing.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let dir = flatten(direction);
    if dir.length_squared() <= MIN_DIRECTION_SQR {
        return None;
    }

    Some(Quat::from_rotation_y(f32::atan2(-dir.x, -dir.z)))
}

/// Bounded-rate turn: slerp toward `target` with factor `rate * dt` (clamped to 1).
pub fn turn_towards(current: Quat, target: Quat, rate: f32, dt: f32) -> Quat {
    let t = (rate * dt).clamp(0.0, 1.0);
    current.slerp(target, t).normalize()
}

use bevy::prelude::*;

/// Initial camera position; the orbit behavior derives its starting
/// distance, pitch and yaw from this offset to the origin.
pub const CAMERA_START: Vec3 = Vec3::new(2.0, 2.0, 0.0);

pub const CLEAR_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);

/// Orbit defaults, overridable per attachment through the behavior config.
pub const ORBIT_DISTANCE_MIN: f32 = 0.1;
pub const ORBIT_DISTANCE_MAX: f32 = 100.0;
pub const ORBIT_INERTIA_FACTOR: f32 = 0.0;

pub const ORBIT_YAW_SENSITIVITY: f32 = 0.005;
pub const ORBIT_PITCH_SENSITIVITY: f32 = 0.004;
pub const ORBIT_PITCH_LIMIT: f32 = 1.55;

//! Orbit camera behavior.
//!
//! The camera circles a focus point at a clamped distance. Input systems
//! write yaw/pitch/distance targets; the update system eases the current
//! values towards them (inertia) and rebuilds the transform every frame, so
//! the camera always looks at the focus even while it moves.

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::camera::{
    CAMERA_START, ORBIT_DISTANCE_MAX, ORBIT_DISTANCE_MIN, ORBIT_INERTIA_FACTOR,
    ORBIT_PITCH_LIMIT, ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY,
};

use crate::engine::behavior::registry::BehaviorConfig;

pub const ORBIT_CAMERA: &str = "orbitCamera";
pub const ORBIT_CAMERA_INPUT_MOUSE: &str = "orbitCameraInputMouse";
pub const ORBIT_CAMERA_INPUT_TOUCH: &str = "orbitCameraInputTouch";

/// Routes mouse drag and wheel input into the orbit targets.
#[derive(Component, Default)]
pub struct OrbitCameraInputMouse;

/// Routes one-finger drag and two-finger pinch into the orbit targets.
#[derive(Component, Default)]
pub struct OrbitCameraInputTouch;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Node whose world position the camera follows; `focus_point` is used
    /// directly when unset.
    pub focus_entity: Option<Entity>,
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub distance_min: f32,
    pub distance_max: f32,
    /// Seconds to close ~63% of the gap to the target; zero snaps.
    pub inertia_factor: f32,
    pub frame_on_start: bool,
    current_yaw: f32,
    current_pitch: f32,
    current_distance: f32,
    framed: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let offset = CAMERA_START;
        let distance = offset.length().max(ORBIT_DISTANCE_MIN);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).asin();
        Self {
            focus_entity: None,
            focus_point: Vec3::ZERO,
            yaw,
            pitch,
            distance,
            distance_min: ORBIT_DISTANCE_MIN,
            distance_max: ORBIT_DISTANCE_MAX,
            inertia_factor: ORBIT_INERTIA_FACTOR,
            frame_on_start: false,
            current_yaw: yaw,
            current_pitch: pitch,
            current_distance: distance,
            framed: false,
        }
    }
}

impl OrbitCamera {
    /// Builds an orbit camera from a flat parameter map. Angles are given in
    /// degrees; unknown keys are ignored, missing ones keep their defaults.
    pub fn from_config(config: &BehaviorConfig) -> Self {
        let mut orbit = Self::default();
        let number = |key: &str| config.get(key).and_then(|value| value.as_f64());
        if let Some(value) = number("distanceMin") {
            orbit.distance_min = value as f32;
        }
        if let Some(value) = number("distanceMax") {
            orbit.distance_max = value as f32;
        }
        if let Some(value) = number("inertiaFactor") {
            orbit.inertia_factor = (value as f32).max(0.0);
        }
        if let Some(value) = number("distance") {
            orbit.distance = value as f32;
        }
        if let Some(value) = number("yaw") {
            orbit.yaw = (value as f32).to_radians();
        }
        if let Some(value) = number("pitch") {
            orbit.pitch = (value as f32).to_radians();
        }
        if let Some(value) = config.get("frameOnStart").and_then(|value| value.as_bool()) {
            orbit.frame_on_start = value;
        }
        orbit.distance = orbit.distance.clamp(orbit.distance_min, orbit.distance_max);
        orbit.current_yaw = orbit.yaw;
        orbit.current_pitch = orbit.pitch;
        orbit.current_distance = orbit.distance;
        orbit
    }

    pub fn dolly(&mut self, amount: f32) {
        self.distance = (self.distance - amount).clamp(self.distance_min, self.distance_max);
    }

    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Interpolation weight for one frame of easing.
    fn smoothing(&self, delta_secs: f32) -> f32 {
        if self.inertia_factor <= f32::EPSILON {
            1.0
        } else {
            (delta_secs / self.inertia_factor).clamp(0.0, 1.0)
        }
    }
}

/// Mouse drag orbits, wheel dollies.
pub fn orbit_mouse_input(
    mut cameras: Query<&mut OrbitCamera, With<OrbitCameraInputMouse>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    let mut scroll_accum = 0.0;
    for event in scroll_events.read() {
        scroll_accum += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.05,
        };
    }

    for mut orbit in &mut cameras {
        if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
            orbit.rotate(
                -mouse_delta.x * ORBIT_YAW_SENSITIVITY,
                -mouse_delta.y * ORBIT_PITCH_SENSITIVITY,
            );
        }
        if scroll_accum.abs() > f32::EPSILON {
            let dolly_speed = (orbit.distance * 0.2).clamp(0.05, 10.0);
            orbit.dolly(scroll_accum * dolly_speed);
        }
    }
}

/// One-finger drag orbits, two-finger pinch dollies.
pub fn orbit_touch_input(
    mut cameras: Query<&mut OrbitCamera, With<OrbitCameraInputTouch>>,
    touches: Res<Touches>,
) {
    let active: Vec<_> = touches.iter().collect();
    for mut orbit in &mut cameras {
        match active.as_slice() {
            [touch] => {
                let delta = touch.delta();
                if delta != Vec2::ZERO {
                    orbit.rotate(
                        -delta.x * ORBIT_YAW_SENSITIVITY,
                        -delta.y * ORBIT_PITCH_SENSITIVITY,
                    );
                }
            }
            [first, second] => {
                let spread = first.position().distance(second.position());
                let previous = first
                    .previous_position()
                    .distance(second.previous_position());
                let pinch = spread - previous;
                if pinch.abs() > f32::EPSILON {
                    let dolly_speed = (orbit.distance * 0.2).clamp(0.05, 10.0);
                    orbit.dolly(pinch * 0.01 * dolly_speed);
                }
            }
            _ => {}
        }
    }
}

/// Eases towards the targets and rebuilds the camera transform around the
/// focus. Runs after the input systems in the same frame.
pub fn orbit_camera_update(
    mut cameras: Query<(&mut Transform, &mut OrbitCamera)>,
    focus_nodes: Query<&GlobalTransform, Without<OrbitCamera>>,
    time: Res<Time>,
) {
    for (mut transform, mut orbit) in &mut cameras {
        if let Some(focus_entity) = orbit.focus_entity {
            if let Ok(global) = focus_nodes.get(focus_entity) {
                orbit.focus_point = global.translation();
            }
        }

        // the first frame after framing snaps, inertia applies from then on
        let weight = if orbit.frame_on_start && !orbit.framed {
            orbit.framed = true;
            1.0
        } else {
            orbit.smoothing(time.delta_secs())
        };

        orbit.current_yaw += (orbit.yaw - orbit.current_yaw) * weight;
        orbit.current_pitch += (orbit.pitch - orbit.current_pitch) * weight;
        orbit.current_distance += (orbit.distance - orbit.current_distance) * weight;

        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            orbit.current_yaw,
            -orbit.current_pitch,
            0.0,
        );
        transform.translation = orbit.focus_point + rotation * (Vec3::Z * orbit.current_distance);
        transform.look_at(orbit.focus_point, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn config(pairs: &[(&str, Value)]) -> BehaviorConfig {
        let mut map = Map::new();
        for (key, value) in pairs {
            map.insert((*key).to_owned(), value.clone());
        }
        map
    }

    #[test]
    fn default_orbit_matches_the_start_position() {
        let orbit = OrbitCamera::default();
        let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, -orbit.pitch, 0.0);
        let position = orbit.focus_point + rotation * (Vec3::Z * orbit.distance);
        assert!((position - CAMERA_START).length() < 1e-4);
    }

    #[test]
    fn config_overrides_defaults_and_ignores_unknown_keys() {
        let orbit = OrbitCamera::from_config(&config(&[
            ("distanceMax", Value::from(60.0)),
            ("inertiaFactor", Value::from(0.2)),
            ("frameOnStart", Value::from(false)),
            ("autoRender", Value::from(true)),
        ]));
        assert_eq!(orbit.distance_max, 60.0);
        assert_eq!(orbit.inertia_factor, 0.2);
        assert!(!orbit.frame_on_start);
        assert_eq!(orbit.distance_min, ORBIT_DISTANCE_MIN);
    }

    #[test]
    fn dolly_is_clamped_to_the_distance_range() {
        let mut orbit = OrbitCamera::from_config(&config(&[
            ("distanceMin", Value::from(1.0)),
            ("distanceMax", Value::from(5.0)),
            ("distance", Value::from(3.0)),
        ]));
        orbit.dolly(100.0);
        assert_eq!(orbit.distance, 1.0);
        orbit.dolly(-100.0);
        assert_eq!(orbit.distance, 5.0);
    }

    #[test]
    fn pitch_is_clamped_at_the_poles() {
        let mut orbit = OrbitCamera::default();
        orbit.rotate(0.0, 100.0);
        assert_eq!(orbit.pitch, ORBIT_PITCH_LIMIT);
        orbit.rotate(0.0, -200.0);
        assert_eq!(orbit.pitch, -ORBIT_PITCH_LIMIT);
    }

    #[test]
    fn zero_inertia_snaps_in_one_step() {
        let mut orbit = OrbitCamera::default();
        orbit.inertia_factor = 0.0;
        assert_eq!(orbit.smoothing(0.016), 1.0);
        orbit.inertia_factor = 0.2;
        let weight = orbit.smoothing(0.016);
        assert!(weight > 0.0 && weight < 1.0);
    }
}

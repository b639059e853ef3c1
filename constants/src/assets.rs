use bevy::prelude::*;

/// Placement of one viewable splat capture. Translations, rotations and
/// scales align the separately scanned captures onto a common pivot.
pub struct ViewTarget {
    pub name: &'static str,
    pub label: &'static str,
    pub source: &'static str,
    pub translation: Vec3,
    pub rotation_deg: Vec3,
    pub scale: f32,
}

/// The three captures the viewer switches between.
pub const VIEW_TARGETS: [ViewTarget; 3] = [
    ViewTarget {
        name: "capture1",
        label: "V1",
        source: "splats/capture-01.ply",
        translation: Vec3::new(-0.04, -0.08, -0.06),
        rotation_deg: Vec3::new(-13.86, -64.0, 13.32),
        scale: 1.15,
    },
    ViewTarget {
        name: "capture2",
        label: "V2",
        source: "splats/capture-02.ply",
        translation: Vec3::ZERO,
        rotation_deg: Vec3::ZERO,
        scale: 1.0,
    },
    ViewTarget {
        name: "capture3",
        label: "V3",
        source: "splats/capture-03.ply",
        translation: Vec3::new(-0.04, 0.02, -0.03),
        rotation_deg: Vec3::new(0.0, 3.48, 0.0),
        scale: 0.9,
    },
];

/// Target shown before any button press.
pub const DEFAULT_TARGET: usize = 0;

pub const ORBIT_SCRIPT_ID: &str = "orbit";
pub const ORBIT_SCRIPT_PATH: &str = "scripts/orbit-camera.behavior.json";

pub const UI_FONT_ID: &str = "font";
pub const UI_FONT_PATH: &str = "fonts/courier-prime.ttf";

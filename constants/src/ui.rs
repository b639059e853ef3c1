use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Splat Viewer";

pub const BUTTON_WIDTH: f32 = 175.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 25.0;
pub const BUTTON_ROW_BOTTOM: f32 = 24.0;
pub const LABEL_FONT_SIZE: f32 = 32.0;

pub const NORMAL_BUTTON: Color = Color::srgb(0.85, 0.85, 0.85);
pub const HOVERED_BUTTON: Color = Color::srgb(0.95, 0.95, 0.95);
pub const PRESSED_BUTTON: Color = Color::srgb(0.65, 0.65, 0.65);
pub const LABEL_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);

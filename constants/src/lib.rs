pub mod assets;
pub mod camera;
pub mod ui;

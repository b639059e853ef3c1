pub mod assets;
pub mod behavior;
pub mod camera;
pub mod core;
pub mod loading;
pub mod scene;

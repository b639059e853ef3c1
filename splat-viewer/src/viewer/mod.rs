//! Viewer application: scene composition, view switching and the button row.

pub mod compose;
pub mod switcher;
pub mod ui;

//! Core application setup and state management.

/// Application setup and plugin configuration.
pub mod app_setup;

/// Application state machine and transitions.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
pub mod window_config;

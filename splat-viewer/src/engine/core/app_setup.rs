use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::camera::CLEAR_COLOR;

use crate::engine::assets::behavior_manifest::BehaviorScript;
use crate::engine::assets::resolved::ResolvedAssets;
use crate::engine::assets::splat::SplatAssetPlugin;
use crate::engine::behavior::registry::{BehaviorRegistry, release_detached_behaviors};
use crate::engine::camera::orbit::{orbit_camera_update, orbit_mouse_input, orbit_touch_input};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::systems::{LoadingProgress, poll_asset_barrier, start_loading};
use crate::viewer::compose::compose_scene;
use crate::viewer::ui::view_button_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(SplatAssetPlugin)
        // Registers BehaviorScript as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<BehaviorScript>::new(&["behavior.json"]))
        .insert_resource(ClearColor(CLEAR_COLOR));

    // Initialise resources early
    app.init_resource::<ResolvedAssets>()
        .init_resource::<LoadingProgress>()
        .init_resource::<BehaviorRegistry>();

    // State-based system scheduling
    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            poll_asset_barrier.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::SceneReady), compose_scene)
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::SceneReady)),
        );

    // Runtime systems - only run once the scene is composed. Input writes
    // the orbit targets before the camera transform is rebuilt.
    let runtime_systems = (
        view_button_system,
        orbit_mouse_input,
        orbit_touch_input,
        orbit_camera_update,
    )
        .chain();

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)))
        .add_systems(
            Update,
            release_detached_behaviors.run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

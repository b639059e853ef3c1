use bevy::prelude::*;

/// Application lifecycle. `Loading` polls the asset barrier, `SceneReady`
/// composes the scene exactly once, `Running` drives the interactive systems.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    SceneReady,
    Running,
}

pub fn transition_to_running(mut next_state: ResMut<NextState<AppState>>) {
    info!("scene composed, entering interactive state");
    next_state.set(AppState::Running);
}

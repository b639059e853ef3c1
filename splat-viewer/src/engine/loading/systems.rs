//! Systems driving the load barrier from the asset server.

use bevy::asset::{LoadState, UntypedHandle};
use bevy::prelude::*;

use crate::engine::assets::behavior_manifest::BehaviorScript;
use crate::engine::assets::descriptor::{AssetDescriptor, AssetKind, viewer_descriptors};
use crate::engine::assets::resolved::{ResolvedAsset, ResolvedAssets};
use crate::engine::assets::splat::SplatCloud;
use crate::engine::core::app_state::AppState;
use crate::engine::loading::barrier::{LoadBarrier, LoadOutcome};

/// The in-flight descriptor set and its barrier state.
#[derive(Resource)]
pub struct AssetBarrier {
    descriptors: Vec<(AssetDescriptor, UntypedHandle)>,
    barrier: LoadBarrier,
}

/// Per-asset progress mirror for diagnostics and loading frontends.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub states: Vec<(String, bool)>,
    pub complete: bool,
}

/// Issues one fetch per descriptor and arms the barrier.
pub fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let descriptors = viewer_descriptors();
    let barrier = match LoadBarrier::new(&descriptors) {
        Ok(barrier) => barrier,
        Err(err) => {
            error!("invalid asset descriptor set: {err}");
            return;
        }
    };

    info!("loading {} assets", descriptors.len());
    let descriptors = descriptors
        .into_iter()
        .map(|descriptor| {
            let handle = issue_load(&asset_server, &descriptor);
            (descriptor, handle)
        })
        .collect();

    commands.insert_resource(AssetBarrier {
        descriptors,
        barrier,
    });
}

fn issue_load(asset_server: &AssetServer, descriptor: &AssetDescriptor) -> UntypedHandle {
    let source = descriptor.source.clone();
    match descriptor.kind {
        AssetKind::Splat => asset_server.load::<SplatCloud>(source).untyped(),
        AssetKind::Script => asset_server.load::<BehaviorScript>(source).untyped(),
        AssetKind::Font => asset_server.load::<Font>(source).untyped(),
    }
}

/// Polls load states into the barrier. Each table write is applied before the
/// completion transition can be observed, so `SceneReady` systems always see
/// the final table. Fetches that fail stay out of the table; their failures
/// are surfaced once, after completion.
pub fn poll_asset_barrier(
    tracker: Option<ResMut<AssetBarrier>>,
    mut resolved: ResMut<ResolvedAssets>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(mut tracker) = tracker else {
        return;
    };
    let AssetBarrier {
        descriptors,
        barrier,
    } = &mut *tracker;

    for (descriptor, handle) in descriptors.iter() {
        if !barrier.is_pending(&descriptor.identifier) {
            continue;
        }
        let completed = match asset_server.get_load_state(handle.id()) {
            Some(LoadState::Loaded) => {
                resolved.insert(
                    &descriptor.identifier,
                    ResolvedAsset {
                        kind: descriptor.kind,
                        handle: handle.clone(),
                    },
                );
                barrier.resolve(&descriptor.identifier, LoadOutcome::Ready)
            }
            Some(LoadState::Failed(err)) => barrier.resolve(
                &descriptor.identifier,
                LoadOutcome::Failed {
                    cause: err.to_string(),
                },
            ),
            _ => false,
        };
        if completed {
            for failure in barrier.failures() {
                warn!("{failure}");
            }
            info!(
                "all {} assets resolved ({} failed), composing scene",
                barrier.total(),
                barrier.failures().len()
            );
            progress.complete = true;
            next_state.set(AppState::SceneReady);
        }
    }

    progress.states = descriptors
        .iter()
        .map(|(descriptor, _)| {
            (
                descriptor.identifier.clone(),
                !barrier.is_pending(&descriptor.identifier),
            )
        })
        .collect();
}

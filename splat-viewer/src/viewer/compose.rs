//! One-shot scene composition, run once the load barrier releases.
//!
//! Builds the whole interactive scene from the resolved-resource table: the
//! capture nodes under a common anchor, the orbit camera with its behaviors,
//! the switcher with its default selection, and the button row. A capture
//! whose payload never arrived still gets a (empty) node so the button row
//! and switcher indices stay aligned.

use bevy::math::EulerRot;
use bevy::prelude::*;
use serde_json::Value;

use constants::assets::{DEFAULT_TARGET, ORBIT_SCRIPT_ID, UI_FONT_ID, VIEW_TARGETS};
use constants::camera::CAMERA_START;

use crate::engine::assets::behavior_manifest::{BehaviorScript, merged_config};
use crate::engine::assets::resolved::ResolvedAssets;
use crate::engine::behavior::registry::{BehaviorConfig, attach};
use crate::engine::camera::orbit::{
    ORBIT_CAMERA, ORBIT_CAMERA_INPUT_MOUSE, ORBIT_CAMERA_INPUT_TOUCH, OrbitCamera,
};
use crate::engine::scene::graph::{add_child, set_enabled, set_local_transform};
use crate::engine::scene::instantiate::instantiate_splat;
use crate::error::ViewerError;
use crate::viewer::switcher::{ViewSwitcher, apply_transition};
use crate::viewer::ui::spawn_view_buttons;

pub fn compose_scene(world: &mut World) {
    if let Err(err) = try_compose(world) {
        error!("scene composition failed: {err}");
    }
}

fn try_compose(world: &mut World) -> Result<(), ViewerError> {
    let anchor = world
        .spawn((
            Name::new("scene"),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let mut targets = Vec::with_capacity(VIEW_TARGETS.len());
    for target in &VIEW_TARGETS {
        let resolved = world.resource::<ResolvedAssets>().get(target.name).cloned();
        let node = match resolved {
            Some(resolved) => instantiate_splat(world, target.name, &resolved, anchor)?,
            None => {
                warn!("{} has no payload, composing an empty node", target.name);
                let node = world
                    .spawn((
                        Name::new(target.name),
                        Transform::default(),
                        Visibility::default(),
                    ))
                    .id();
                add_child(world, anchor, node)?;
                node
            }
        };
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            target.rotation_deg.x.to_radians(),
            target.rotation_deg.y.to_radians(),
            target.rotation_deg.z.to_radians(),
        );
        set_local_transform(
            world,
            node,
            target.translation,
            rotation,
            Vec3::splat(target.scale),
        );
        set_enabled(world, node, false);
        targets.push(node);
    }

    let camera = world
        .spawn((
            Camera3d::default(),
            Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();

    let config = orbit_config(world);
    attach(world, camera, ORBIT_CAMERA, &config)?;
    attach(world, camera, ORBIT_CAMERA_INPUT_MOUSE, &config)?;
    attach(world, camera, ORBIT_CAMERA_INPUT_TOUCH, &config)?;

    // the focus node cannot ride the flat config map; bind it directly
    let focus = targets.first().copied();
    if let Some(mut orbit) = world.get_mut::<OrbitCamera>(camera) {
        orbit.focus_entity = focus;
    }

    let mut switcher = ViewSwitcher::new(targets);
    if let Some(transition) = switcher.preselect(DEFAULT_TARGET)? {
        apply_transition(world, transition);
    }
    world.insert_resource(switcher);

    let font = world
        .resource::<ResolvedAssets>()
        .typed::<Font>(UI_FONT_ID)
        .unwrap_or_default();
    spawn_view_buttons(world, font);

    Ok(())
}

/// Orbit parameters: manifest defaults merged under the viewer's overrides.
fn orbit_config(world: &World) -> BehaviorConfig {
    let defaults = world
        .resource::<ResolvedAssets>()
        .typed::<BehaviorScript>(ORBIT_SCRIPT_ID)
        .and_then(|handle| {
            world
                .resource::<Assets<BehaviorScript>>()
                .get(&handle)
                .map(|script| script.defaults.clone())
        })
        .unwrap_or_default();

    let mut overrides = BehaviorConfig::new();
    overrides.insert("inertiaFactor".into(), Value::from(0.2));
    overrides.insert("distanceMax".into(), Value::from(60.0));
    overrides.insert("frameOnStart".into(), Value::from(false));
    merged_config(&defaults, &overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::splat::SplatCloud;
    use crate::engine::behavior::registry::BehaviorRegistry;
    use crate::engine::scene::graph::is_enabled;
    use crate::viewer::ui::ViewButton;

    fn test_world() -> World {
        let mut world = World::new();
        world.init_resource::<ResolvedAssets>();
        world.init_resource::<BehaviorRegistry>();
        world.init_resource::<Assets<SplatCloud>>();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world.init_resource::<Assets<BehaviorScript>>();
        world
    }

    #[test]
    fn composition_without_payloads_still_builds_the_scene() {
        let mut world = test_world();
        compose_scene(&mut world);

        let switcher = world.resource::<ViewSwitcher>();
        assert_eq!(switcher.len(), VIEW_TARGETS.len());
        assert_eq!(switcher.active_index(), Some(DEFAULT_TARGET));

        // exactly the default target is enabled
        let targets: Vec<_> = (0..switcher.len())
            .map(|index| switcher.target(index).unwrap())
            .collect();
        for (index, node) in targets.iter().enumerate() {
            assert_eq!(is_enabled(&world, *node), index == DEFAULT_TARGET);
        }

        let mut buttons = world.query::<&ViewButton>();
        assert_eq!(buttons.iter(&world).count(), VIEW_TARGETS.len());
    }

    #[test]
    fn camera_carries_the_configured_orbit_behavior() {
        let mut world = test_world();
        compose_scene(&mut world);

        let mut cameras = world.query::<(&Camera3d, &OrbitCamera)>();
        let (_, orbit) = cameras.single(&world).unwrap();
        assert_eq!(orbit.distance_max, 60.0);
        assert_eq!(orbit.inertia_factor, 0.2);
        assert!(!orbit.frame_on_start);

        let focus = orbit.focus_entity.unwrap();
        assert_eq!(focus, world.resource::<ViewSwitcher>().target(0).unwrap());
    }
}

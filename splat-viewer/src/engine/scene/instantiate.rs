//! Turns resolved splat payloads into scene-node subtrees.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::assets::resolved::ResolvedAsset;
use crate::engine::assets::splat::SplatCloud;
use crate::engine::scene::graph::add_child;
use crate::error::ViewerError;

/// Marker on the root node of an instantiated capture.
#[derive(Component, Debug)]
pub struct SplatInstance {
    pub identifier: String,
}

/// Build the renderable mesh for a capture: one point-list vertex per splat
/// centre, vertex colours carried through.
pub fn create_splat_mesh(cloud: &SplatCloud) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, cloud.positions.clone());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, cloud.colors.clone());
    mesh
}

/// Instantiates a resolved capture under `anchor`. The returned root is what
/// the application names, positions and toggles; the mesh child is an
/// internal detail of the instance. A payload that is not (or no longer) in
/// the splat store produces an empty but valid node.
pub fn instantiate_splat(
    world: &mut World,
    name: &str,
    resolved: &ResolvedAsset,
    anchor: Entity,
) -> Result<Entity, ViewerError> {
    let mesh = resolved
        .handle
        .clone()
        .try_typed::<SplatCloud>()
        .ok()
        .and_then(|handle| {
            let clouds = world.resource::<Assets<SplatCloud>>();
            clouds.get(&handle).map(create_splat_mesh)
        });

    let root = world
        .spawn((
            Name::new(name.to_owned()),
            Transform::default(),
            Visibility::default(),
            SplatInstance {
                identifier: name.to_owned(),
            },
        ))
        .id();

    if let Some(mesh) = mesh {
        let mesh_handle = world.resource_mut::<Assets<Mesh>>().add(mesh);
        let material = world.resource_mut::<Assets<StandardMaterial>>().add(StandardMaterial {
            unlit: true,
            ..default()
        });
        let points = world
            .spawn((
                Mesh3d(mesh_handle),
                MeshMaterial3d(material),
                Transform::default(),
                Visibility::default(),
            ))
            .id();
        world.entity_mut(root).add_child(points);
    }

    add_child(world, anchor, root)?;
    Ok(root)
}

//! Behavior registry and attach/detach lifecycle.
//!
//! A behavior is an externally defined controller looked up by name.
//! Attaching one forwards the flat config map verbatim to its constructor;
//! attachment order is initialisation order. Records follow the node's
//! lifecycle: once a node is despawned its records are released by the
//! sweep, exactly once.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::engine::camera::orbit::{
    ORBIT_CAMERA, ORBIT_CAMERA_INPUT_MOUSE, ORBIT_CAMERA_INPUT_TOUCH, OrbitCamera,
    OrbitCameraInputMouse, OrbitCameraInputTouch,
};
use crate::error::ViewerError;

/// Flat parameter map forwarded verbatim to a behavior's constructor.
pub type BehaviorConfig = serde_json::Map<String, serde_json::Value>;

type Constructor = fn(&mut EntityWorldMut, &BehaviorConfig);

#[derive(Resource)]
pub struct BehaviorRegistry {
    constructors: HashMap<&'static str, Constructor>,
    attached: HashMap<Entity, Vec<&'static str>>,
}

impl Default for BehaviorRegistry {
    /// Registry with the built-in camera behaviors.
    fn default() -> Self {
        let mut registry = Self {
            constructors: HashMap::new(),
            attached: HashMap::new(),
        };
        registry.register(ORBIT_CAMERA, |entity, config| {
            entity.insert(OrbitCamera::from_config(config));
        });
        registry.register(ORBIT_CAMERA_INPUT_MOUSE, |entity, _config| {
            entity.insert(OrbitCameraInputMouse);
        });
        registry.register(ORBIT_CAMERA_INPUT_TOUCH, |entity, _config| {
            entity.insert(OrbitCameraInputTouch);
        });
        registry
    }
}

impl BehaviorRegistry {
    pub fn register(&mut self, name: &'static str, constructor: Constructor) {
        self.constructors.insert(name, constructor);
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Behaviors attached to `node`, in attachment order.
    pub fn attachments(&self, node: Entity) -> &[&'static str] {
        self.attached
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Attaches the named behavior to `node`, forwarding `config` verbatim to
/// its constructor.
pub fn attach(
    world: &mut World,
    node: Entity,
    name: &str,
    config: &BehaviorConfig,
) -> Result<(), ViewerError> {
    world.resource_scope(|world, mut registry: Mut<BehaviorRegistry>| {
        let Some((&key, &constructor)) = registry.constructors.get_key_value(name) else {
            return Err(ViewerError::UnknownBehavior {
                name: name.to_owned(),
            });
        };
        constructor(&mut world.entity_mut(node), config);
        registry.attached.entry(node).or_default().push(key);
        Ok(())
    })
}

/// Releases attachment records of nodes that no longer exist. The behavior
/// components themselves die with the node; each record is torn down exactly
/// once.
pub fn release_detached_behaviors(world: &mut World) {
    world.resource_scope(|world, mut registry: Mut<BehaviorRegistry>| {
        registry.attached.retain(|node, behaviors| {
            if world.get_entity(*node).is_ok() {
                return true;
            }
            debug!(
                "released {} behavior(s) from despawned node {node}",
                behaviors.len()
            );
            false
        });
    });
}

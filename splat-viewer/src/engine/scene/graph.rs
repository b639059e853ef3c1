//! Scene-tree operations over the entity hierarchy.
//!
//! Nodes own their children through `Children`; `ChildOf` is the non-owning
//! back-reference used only for ancestry checks. A node's own enabled flag
//! is its `Visibility` (`Inherited` = enabled, `Hidden` = disabled);
//! effective activity folds in every ancestor's flag.

use bevy::prelude::*;

use crate::error::ViewerError;

/// Re-parents `child` under `parent`. Rejected when `child` is `parent`
/// itself or one of its ancestors; the hierarchy is untouched on error.
pub fn add_child(world: &mut World, parent: Entity, child: Entity) -> Result<(), ViewerError> {
    if parent == child || is_ancestor(world, child, parent) {
        return Err(ViewerError::Cycle { parent, child });
    }
    world.entity_mut(parent).add_child(child);
    Ok(())
}

/// Whether `candidate` appears on the ancestor chain of `node`.
pub fn is_ancestor(world: &World, candidate: Entity, node: Entity) -> bool {
    let mut current = node;
    while let Some(child_of) = world.get::<ChildOf>(current) {
        let parent = child_of.parent();
        if parent == candidate {
            return true;
        }
        current = parent;
    }
    false
}

/// Sets the node's own enabled flag. Descendants keep their own flags; their
/// effective activity changes through inheritance only.
pub fn set_enabled(world: &mut World, node: Entity, enabled: bool) {
    let visibility = if enabled {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    world.entity_mut(node).insert(visibility);
}

/// The node's own flag, ignoring ancestors.
pub fn is_enabled(world: &World, node: Entity) -> bool {
    !matches!(world.get::<Visibility>(node), Some(Visibility::Hidden))
}

/// Effective activity: the node and every ancestor must be enabled.
pub fn is_effectively_active(world: &World, node: Entity) -> bool {
    if !is_enabled(world, node) {
        return false;
    }
    let mut current = node;
    while let Some(child_of) = world.get::<ChildOf>(current) {
        let parent = child_of.parent();
        if !is_enabled(world, parent) {
            return false;
        }
        current = parent;
    }
    true
}

/// Pure data mutation of the node's local transform.
pub fn set_local_transform(
    world: &mut World,
    node: Entity,
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,
) {
    world.entity_mut(node).insert(Transform {
        translation,
        rotation,
        scale,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_node(world: &mut World, name: &str) -> Entity {
        world
            .spawn((
                Name::new(name.to_owned()),
                Transform::default(),
                Visibility::default(),
            ))
            .id()
    }

    #[test]
    fn add_child_reparents() {
        let mut world = World::new();
        let a = spawn_node(&mut world, "a");
        let b = spawn_node(&mut world, "b");
        let c = spawn_node(&mut world, "c");

        add_child(&mut world, a, c).unwrap();
        add_child(&mut world, b, c).unwrap();

        assert!(world.get::<Children>(a).is_none_or(|ch| ch.is_empty()));
        assert_eq!(world.get::<ChildOf>(c).unwrap().parent(), b);
    }

    #[test]
    fn cycles_are_rejected_and_leave_the_graph_unchanged() {
        let mut world = World::new();
        let p = spawn_node(&mut world, "p");
        let c = spawn_node(&mut world, "c");

        add_child(&mut world, p, c).unwrap();
        assert_eq!(
            add_child(&mut world, c, p),
            Err(ViewerError::Cycle {
                parent: c,
                child: p
            })
        );

        // graph unchanged by the failed call
        assert_eq!(world.get::<ChildOf>(c).unwrap().parent(), p);
        assert!(world.get::<ChildOf>(p).is_none());
    }

    #[test]
    fn self_parenting_is_a_cycle() {
        let mut world = World::new();
        let n = spawn_node(&mut world, "n");
        assert!(add_child(&mut world, n, n).is_err());
    }

    #[test]
    fn deep_cycles_are_detected() {
        let mut world = World::new();
        let a = spawn_node(&mut world, "a");
        let b = spawn_node(&mut world, "b");
        let c = spawn_node(&mut world, "c");
        add_child(&mut world, a, b).unwrap();
        add_child(&mut world, b, c).unwrap();
        assert!(add_child(&mut world, c, a).is_err());
    }

    #[test]
    fn parent_toggle_never_mutates_child_flags() {
        let mut world = World::new();
        let parent = spawn_node(&mut world, "parent");
        let child = spawn_node(&mut world, "child");
        add_child(&mut world, parent, child).unwrap();

        assert!(is_effectively_active(&world, child));

        set_enabled(&mut world, parent, false);
        assert!(is_enabled(&world, child));
        assert!(!is_effectively_active(&world, child));

        set_enabled(&mut world, parent, true);
        assert!(is_enabled(&world, child));
        assert!(is_effectively_active(&world, child));
    }

    #[test]
    fn own_flag_disables_only_the_subtree() {
        let mut world = World::new();
        let root = spawn_node(&mut world, "root");
        let a = spawn_node(&mut world, "a");
        let b = spawn_node(&mut world, "b");
        add_child(&mut world, root, a).unwrap();
        add_child(&mut world, root, b).unwrap();

        set_enabled(&mut world, a, false);

        // siblings and ancestors untouched
        assert!(is_enabled(&world, root));
        assert!(is_enabled(&world, b));
        assert!(is_effectively_active(&world, b));
        assert!(!is_effectively_active(&world, a));
    }

    #[test]
    fn destroying_a_node_destroys_its_subtree() {
        let mut world = World::new();
        let parent = spawn_node(&mut world, "parent");
        let child = spawn_node(&mut world, "child");
        add_child(&mut world, parent, child).unwrap();

        world.entity_mut(parent).despawn();
        assert!(world.get_entity(child).is_err());
    }
}

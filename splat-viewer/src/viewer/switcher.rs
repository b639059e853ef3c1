//! Mutually exclusive selection over the capture nodes.
//!
//! The switcher owns the ordered target list and which one is active. It
//! never touches the entities itself; a selection yields a transition
//! (disable the old target, enable the new one) for the caller to apply, so
//! at most one target is ever enabled and re-selecting the active target is
//! a no-op.

use bevy::prelude::*;

use crate::error::ViewerError;

/// Node flips produced by one selection. Deactivation is applied before
/// activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTransition {
    pub deactivate: Option<Entity>,
    pub activate: Entity,
}

#[derive(Resource, Debug, Default)]
pub struct ViewSwitcher {
    targets: Vec<Entity>,
    active: Option<usize>,
}

impl ViewSwitcher {
    /// A switcher over `targets` with nothing selected yet.
    pub fn new(targets: Vec<Entity>) -> Self {
        Self {
            targets,
            active: None,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_target(&self) -> Option<Entity> {
        self.active.map(|index| self.targets[index])
    }

    pub fn target(&self, index: usize) -> Option<Entity> {
        self.targets.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Selects `index`. Returns the node flips to apply, or `None` when the
    /// target is already active.
    pub fn select(&mut self, index: usize) -> Result<Option<SwitchTransition>, ViewerError> {
        if index >= self.targets.len() {
            return Err(ViewerError::TargetOutOfRange {
                index,
                count: self.targets.len(),
            });
        }
        if self.active == Some(index) {
            return Ok(None);
        }
        let deactivate = self.active.map(|previous| self.targets[previous]);
        self.active = Some(index);
        Ok(Some(SwitchTransition {
            deactivate,
            activate: self.targets[index],
        }))
    }

    /// Establishes the initial selection at composition time, before any UI
    /// event. Same transition rules as [`select`](Self::select).
    pub fn preselect(&mut self, index: usize) -> Result<Option<SwitchTransition>, ViewerError> {
        self.select(index)
    }
}

/// Applies a transition to the entity flags, deactivation first.
pub fn apply_transition(world: &mut World, transition: SwitchTransition) {
    use crate::engine::scene::graph::set_enabled;
    if let Some(previous) = transition.deactivate {
        set_enabled(world, previous, false);
    }
    set_enabled(world, transition.activate, true);
}

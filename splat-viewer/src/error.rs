//! Error types for the viewer core.

use bevy::prelude::*;
use thiserror::Error;

/// Errors raised by the loading, scene-composition and behavior layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// An individual asset could not be fetched or decoded. Recorded by the
    /// load barrier; never aborts the remaining loads.
    #[error("asset '{identifier}' failed to load: {cause}")]
    AssetLoadFailed { identifier: String, cause: String },

    /// Re-parenting would make a node its own ancestor.
    #[error("cannot parent {child} under {parent}: child is an ancestor of parent")]
    Cycle { parent: Entity, child: Entity },

    /// No behavior with this name is registered.
    #[error("unknown behavior '{name}'")]
    UnknownBehavior { name: String },

    /// The barrier loader requires at least one descriptor.
    #[error("asset descriptor set is empty")]
    EmptyDescriptorSet,

    /// Two descriptors in the same load call share an identifier.
    #[error("duplicate asset identifier '{identifier}'")]
    DuplicateIdentifier { identifier: String },

    /// `select` was called with an index outside the target list.
    #[error("view target {index} out of range ({count} targets)")]
    TargetOutOfRange { index: usize, count: usize },
}

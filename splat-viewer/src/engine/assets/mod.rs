//! Asset handling for the viewer.
//!
//! Declarative descriptors for the remote resources, the resolved-resource
//! table populated by the load barrier, the splat PLY asset type and the
//! behavior manifest asset.

pub mod behavior_manifest;
pub mod descriptor;
pub mod resolved;
pub mod splat;

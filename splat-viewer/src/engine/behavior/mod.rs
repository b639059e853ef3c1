//! Named behaviors attachable to scene nodes.

pub mod registry;

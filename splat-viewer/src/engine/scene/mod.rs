//! Scene-tree operations and splat instantiation.

pub mod graph;
pub mod instantiate;

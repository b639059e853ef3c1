//! Barrier-synchronised asset loading.
//!
//! The barrier core tracks the pending descriptor set; the systems feed it
//! from asset-server load states and perform the single state transition
//! once every load has resolved.

pub mod barrier;
pub mod systems;

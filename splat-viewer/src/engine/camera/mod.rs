//! Camera behaviors.

pub mod orbit;

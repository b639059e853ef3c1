//! Behavior manifests loaded from `*.behavior.json`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::behavior::registry::BehaviorConfig;

/// Named behavior manifest. Mirrors the JSON structure exactly: the behavior
/// name plus the default config merged under the attach-time overrides.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorScript {
    pub name: String,
    #[serde(default)]
    pub defaults: BehaviorConfig,
}

/// Overrides win over defaults; both maps stay flat.
pub fn merged_config(defaults: &BehaviorConfig, overrides: &BehaviorConfig) -> BehaviorConfig {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

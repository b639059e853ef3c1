//! The resolved-resource table.

use bevy::asset::UntypedHandle;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::engine::assets::descriptor::AssetKind;

/// One successfully loaded asset, bound to its descriptor's identifier.
#[derive(Debug, Clone)]
pub struct ResolvedAsset {
    pub kind: AssetKind,
    pub handle: UntypedHandle,
}

/// Resources keyed by descriptor identifier. An entry exists iff the
/// corresponding load completed successfully; failed loads never appear.
#[derive(Resource, Default)]
pub struct ResolvedAssets {
    entries: HashMap<String, ResolvedAsset>,
}

impl ResolvedAssets {
    pub fn insert(&mut self, identifier: impl Into<String>, asset: ResolvedAsset) {
        self.entries.insert(identifier.into(), asset);
    }

    pub fn get(&self, identifier: &str) -> Option<&ResolvedAsset> {
        self.entries.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Typed handle for an entry, `None` when the identifier is absent or of
    /// a different asset type.
    pub fn typed<A: Asset>(&self, identifier: &str) -> Option<Handle<A>> {
        self.get(identifier)
            .and_then(|resolved| resolved.handle.clone().try_typed::<A>().ok())
    }
}

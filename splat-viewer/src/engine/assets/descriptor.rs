//! Declarative references to the remote resources the viewer needs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ViewerError;
use constants::assets::{
    ORBIT_SCRIPT_ID, ORBIT_SCRIPT_PATH, UI_FONT_ID, UI_FONT_PATH, VIEW_TARGETS,
};

/// What a remote resource decodes to once fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Splat,
    Script,
    Font,
}

/// Pre-load reference to a remote resource. Carries no loading logic itself;
/// consumed by the load barrier, retained afterwards only through the
/// resolved-resource table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub kind: AssetKind,
    pub identifier: String,
    pub source: String,
}

impl AssetDescriptor {
    pub fn new(kind: AssetKind, identifier: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            source: source.into(),
        }
    }
}

/// Checks a descriptor set before loads are issued: non-empty, identifiers
/// unique within the call.
pub fn validate_descriptors(descriptors: &[AssetDescriptor]) -> Result<(), ViewerError> {
    if descriptors.is_empty() {
        return Err(ViewerError::EmptyDescriptorSet);
    }
    let mut seen = HashSet::new();
    for descriptor in descriptors {
        if !seen.insert(descriptor.identifier.as_str()) {
            return Err(ViewerError::DuplicateIdentifier {
                identifier: descriptor.identifier.clone(),
            });
        }
    }
    Ok(())
}

/// The fixed asset set of the viewer: three splat captures, the orbit-camera
/// behavior script and the UI font.
pub fn viewer_descriptors() -> Vec<AssetDescriptor> {
    let mut descriptors: Vec<AssetDescriptor> = VIEW_TARGETS
        .iter()
        .map(|target| AssetDescriptor::new(AssetKind::Splat, target.name, target.source))
        .collect();
    descriptors.push(AssetDescriptor::new(
        AssetKind::Script,
        ORBIT_SCRIPT_ID,
        ORBIT_SCRIPT_PATH,
    ));
    descriptors.push(AssetDescriptor::new(
        AssetKind::Font,
        UI_FONT_ID,
        UI_FONT_PATH,
    ));
    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(
            validate_descriptors(&[]),
            Err(ViewerError::EmptyDescriptorSet)
        );
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let descriptors = vec![
            AssetDescriptor::new(AssetKind::Splat, "a", "splats/a.ply"),
            AssetDescriptor::new(AssetKind::Font, "a", "fonts/a.ttf"),
        ];
        assert_eq!(
            validate_descriptors(&descriptors),
            Err(ViewerError::DuplicateIdentifier {
                identifier: "a".to_owned()
            })
        );
    }

    #[test]
    fn viewer_set_is_valid_and_heterogeneous() {
        let descriptors = viewer_descriptors();
        assert!(validate_descriptors(&descriptors).is_ok());
        assert_eq!(
            descriptors
                .iter()
                .filter(|d| d.kind == AssetKind::Splat)
                .count(),
            3
        );
        assert!(descriptors.iter().any(|d| d.kind == AssetKind::Script));
        assert!(descriptors.iter().any(|d| d.kind == AssetKind::Font));
    }
}

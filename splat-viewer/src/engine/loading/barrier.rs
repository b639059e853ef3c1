//! Barrier synchronisation over a set of independent asset loads.

use std::collections::HashSet;

use crate::engine::assets::descriptor::{AssetDescriptor, validate_descriptors};
use crate::error::ViewerError;

/// Result of one asset fetch as seen by the barrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    Failed { cause: String },
}

/// Fires one completion signal after every descriptor in the set has either
/// loaded or permanently failed, regardless of order. A failure never aborts
/// the remaining loads; it is recorded and surfaced after completion.
#[derive(Debug)]
pub struct LoadBarrier {
    outstanding: HashSet<String>,
    total: usize,
    failures: Vec<ViewerError>,
    complete: bool,
}

impl LoadBarrier {
    /// Validates the descriptor set (non-empty, unique identifiers) and arms
    /// the barrier with one pending slot per descriptor.
    pub fn new(descriptors: &[AssetDescriptor]) -> Result<Self, ViewerError> {
        validate_descriptors(descriptors)?;
        Ok(Self {
            outstanding: descriptors
                .iter()
                .map(|descriptor| descriptor.identifier.clone())
                .collect(),
            total: descriptors.len(),
            failures: Vec::new(),
            complete: false,
        })
    }

    /// Applies one load resolution. Each identifier decrements the pending
    /// count at most once; repeat notifications and unknown identifiers are
    /// ignored. Returns `true` exactly when this call completed the barrier.
    pub fn resolve(&mut self, identifier: &str, outcome: LoadOutcome) -> bool {
        if !self.outstanding.remove(identifier) {
            return false;
        }
        if let LoadOutcome::Failed { cause } = outcome {
            self.failures.push(ViewerError::AssetLoadFailed {
                identifier: identifier.to_owned(),
                cause,
            });
        }
        if self.outstanding.is_empty() && !self.complete {
            self.complete = true;
            return true;
        }
        false
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_pending(&self, identifier: &str) -> bool {
        self.outstanding.contains(identifier)
    }

    pub fn pending(&self) -> usize {
        self.outstanding.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Failures recorded so far, in resolution order.
    pub fn failures(&self) -> &[ViewerError] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::descriptor::AssetKind;

    fn descriptors(identifiers: &[&str]) -> Vec<AssetDescriptor> {
        identifiers
            .iter()
            .map(|id| AssetDescriptor::new(AssetKind::Splat, *id, format!("splats/{id}.ply")))
            .collect()
    }

    fn failed(cause: &str) -> LoadOutcome {
        LoadOutcome::Failed {
            cause: cause.to_owned(),
        }
    }

    #[test]
    fn completes_in_issue_order() {
        let set = descriptors(&["a", "b", "c"]);
        let mut barrier = LoadBarrier::new(&set).unwrap();
        assert!(!barrier.resolve("a", LoadOutcome::Ready));
        assert!(!barrier.resolve("b", LoadOutcome::Ready));
        assert!(barrier.resolve("c", LoadOutcome::Ready));
        assert!(barrier.is_complete());
    }

    #[test]
    fn completes_in_reverse_order() {
        let set = descriptors(&["a", "b", "c"]);
        let mut barrier = LoadBarrier::new(&set).unwrap();
        assert!(!barrier.resolve("c", LoadOutcome::Ready));
        assert!(!barrier.resolve("b", LoadOutcome::Ready));
        assert!(barrier.resolve("a", LoadOutcome::Ready));
    }

    #[test]
    fn completes_with_interleaved_failures() {
        let set = descriptors(&["a", "b", "c", "d"]);
        let mut barrier = LoadBarrier::new(&set).unwrap();
        assert!(!barrier.resolve("b", failed("404")));
        assert!(!barrier.resolve("d", LoadOutcome::Ready));
        assert!(!barrier.resolve("a", failed("timeout")));
        assert!(barrier.resolve("c", LoadOutcome::Ready));
        assert_eq!(barrier.failures().len(), 2);
    }

    #[test]
    fn completes_when_every_load_fails() {
        let set = descriptors(&["a", "b"]);
        let mut barrier = LoadBarrier::new(&set).unwrap();
        assert!(!barrier.resolve("a", failed("404")));
        assert!(barrier.resolve("b", failed("404")));
        assert!(barrier.is_complete());
        assert_eq!(barrier.failures().len(), 2);
    }

    #[test]
    fn fires_exactly_once() {
        let set = descriptors(&["a", "b"]);
        let mut barrier = LoadBarrier::new(&set).unwrap();
        assert!(!barrier.resolve("a", LoadOutcome::Ready));
        assert!(barrier.resolve("b", LoadOutcome::Ready));
        // late or repeated notifications never re-fire
        assert!(!barrier.resolve("b", LoadOutcome::Ready));
        assert!(!barrier.resolve("a", LoadOutcome::Ready));
        assert!(barrier.is_complete());
    }

    #[test]
    fn repeat_notifications_decrement_once() {
        let set = descriptors(&["a", "b", "c"]);
        let mut barrier = LoadBarrier::new(&set).unwrap();
        assert!(!barrier.resolve("a", LoadOutcome::Ready));
        assert!(!barrier.resolve("a", LoadOutcome::Ready));
        assert_eq!(barrier.pending(), 2);
    }

    #[test]
    fn unknown_identifiers_are_ignored() {
        let set = descriptors(&["a"]);
        let mut barrier = LoadBarrier::new(&set).unwrap();
        assert!(!barrier.resolve("nope", LoadOutcome::Ready));
        assert_eq!(barrier.pending(), 1);
    }

    #[test]
    fn rejects_invalid_descriptor_sets() {
        assert!(matches!(
            LoadBarrier::new(&[]),
            Err(ViewerError::EmptyDescriptorSet)
        ));
        let mut set = descriptors(&["a"]);
        set.push(AssetDescriptor::new(AssetKind::Font, "a", "fonts/a.ttf"));
        assert!(matches!(
            LoadBarrier::new(&set),
            Err(ViewerError::DuplicateIdentifier { .. })
        ));
    }

    #[test]
    fn heterogeneous_set_completes_in_reverse() {
        // three captures, one script, one font, resolving last-to-first
        let mut set = descriptors(&["capture1", "capture2", "capture3"]);
        set.push(AssetDescriptor::new(
            AssetKind::Script,
            "orbit",
            "scripts/orbit-camera.behavior.json",
        ));
        set.push(AssetDescriptor::new(
            AssetKind::Font,
            "font",
            "fonts/courier-prime.ttf",
        ));
        let mut barrier = LoadBarrier::new(&set).unwrap();

        let mut fired = 0;
        for descriptor in set.iter().rev() {
            if barrier.resolve(&descriptor.identifier, LoadOutcome::Ready) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert!(barrier.is_complete());
        assert_eq!(barrier.pending(), 0);
        assert!(barrier.failures().is_empty());
    }
}

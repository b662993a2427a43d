//! Error types for slot composition.

use thiserror::Error;

/// Errors during slot composition.
///
/// The render-facing entry point maps every variant to an empty render;
/// these are surfaced only through the typed API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("Expected exactly one child element, found none")]
    NoTarget,

    #[error("Expected exactly one child element, found {count}")]
    MultipleTargets { count: usize },

    #[error("Found {count} markers in one children list, at most one is allowed")]
    AmbiguousMarker { count: usize },

    #[error("Forwarding target is not an element")]
    NonElementTarget,
}

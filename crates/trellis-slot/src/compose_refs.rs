//! Reference composition.
//!
//! Fans a single incoming reference request out to every interested
//! holder. The outer (forwarded) binding registers before the inner
//! (target-declared) one, and both receive the mounted handle and the
//! clearing signal in that order.

use trellis_core::RefBinding;

/// Compose the wrapper's reference with the target element's reference.
pub fn compose_refs(outer: Option<RefBinding>, inner: Option<RefBinding>) -> Option<RefBinding> {
    match (outer, inner) {
        (None, None) => None,
        (Some(binding), None) | (None, Some(binding)) => Some(binding),
        (Some(outer), Some(inner)) => Some(outer.join(&inner)),
    }
}

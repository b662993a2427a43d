//! Slot composition engine.
//!
//! Lets a wrapper component forward its props, event handlers, style,
//! class name, and render reference onto a single child element supplied
//! by the caller:
//! 1. Resolve which child is the forwarding target (marker-aware)
//! 2. Merge forwarded props onto the target's own props
//! 3. Compose the forwarded reference with the target's reference
//! 4. Return a clone of the target carrying the merged result

pub mod compose_refs;
pub mod merge;
pub mod resolve;
pub mod slot;

pub use compose_refs::compose_refs;
pub use merge::merge_props;
pub use resolve::resolve_target;
pub use slot::{compose, render_slot};

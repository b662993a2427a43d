//! Site shell utilities for the Trellis front-end.
//!
//! - Class list building
//! - Link externality checks and boolean attributes
//! - Serializable page metadata

pub mod classes;
pub mod links;
pub mod metadata;

pub use classes::*;
pub use links::*;
pub use metadata::*;

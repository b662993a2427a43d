//! Core types for the Trellis slot composition engine.
//!
//! This crate provides the foundational types used across the other trellis crates:
//! - Node tree types handed over by the host renderer
//! - Prop values and event handlers
//! - Render references and their bindings
//! - Error types

pub mod errors;
pub mod node;
pub mod props;
pub mod reference;

pub use errors::*;
pub use node::*;
pub use props::*;
pub use reference::*;

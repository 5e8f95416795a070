//! # AAS Types
//!
//! Value types used across the Asset Administration Shell metamodel:
//! references, language strings, identifiers and kind markers.
//!
//! These are plain values. Model elements hold them by value and compare
//! them structurally.

#[macro_use]
mod macros;

pub mod error;
pub mod identifier;
pub mod kind;
pub mod lang_string;
pub mod reference;

// Re-exports
pub use error::*;
pub use identifier::*;
pub use kind::*;
pub use lang_string::*;
pub use reference::*;

//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Catalog browsing commands
pub mod catalog;

/// Conversational scoring and recommendation commands
pub mod chat;

/// General utility commands
pub mod general;

// Export commands
pub use catalog::*;
pub use chat::*;
pub use general::*;

//! Convenience re-exports for common SortKit usage
//!
//! This prelude module re-exports the most commonly used items from the SortKit crates,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let order: SortOrder = "desc".parse().unwrap();
//! assert_eq!(order.toggle(), SortOrder::Asc);
//! ```

// Core SortKit components
pub use crate::core::SortHelper;
pub use crate::errors::SortKitError;
pub use crate::render::{HeaderOptions, sort_header_cell, sort_link, sort_url, titleize};

// Re-export centralized config
pub use config::{AppConfig, SessionConfig, SortConfig};

// Sort state types and operations
pub use sort_state::prelude::*;

// Session backends
pub use session_store::prelude::*;

// Markup types returned by the renderers
pub use maud::{Markup, PreEscaped};

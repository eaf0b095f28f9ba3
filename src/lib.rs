//! # SortKit
//!
//! Sortable table headers for server-rendered views: remembers which column a
//! table is sorted by in the client's session, builds the sort clause for the
//! query layer, and renders header links that toggle the sort order.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = MemorySession::new();
//!
//!     // GET /contacts?sort_key=last_name&sort_order=desc
//!     let request = RequestContext::new("/contacts")
//!         .with_route("contacts", "list")
//!         .with_param("sort_key", "last_name")
//!         .with_param("sort_order", "desc");
//!
//!     let mut sort = SortHelper::init(&session, request, "id", SortOrder::Asc, None)?;
//!     sort.update().await?;
//!
//!     assert_eq!(sort.clause()?, "last_name desc");
//!
//!     let header = sort.header_cell("last_name", &HeaderOptions::new().caption("Name"))?;
//!     println!("{}", header.into_string());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;
pub mod render;

// Re-export the main public types for convenience
pub use crate::core::SortHelper;
pub use errors::SortKitError;

// Re-export centralized config
pub use config::{AppConfig, SessionConfig, SortConfig};

// Re-export internal crates used in the public API
pub use session_store;
pub use sort_state;

// Re-export external dependencies used in public API
pub use async_trait;
pub use maud;

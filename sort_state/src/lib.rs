//! Sort State - session-backed table sort tracking for SortKit
//!
//! This crate provides the sort order and sort state types, the per-request
//! context, and the update/toggle rules that decide which column a table is
//! sorted by.

pub mod errors;
pub mod order;
pub mod prelude;
pub mod request;
pub mod settings;
pub mod state;
pub mod tracker;


pub use errors::SortError;
pub use order::SortOrder;
pub use request::RequestContext;
pub use settings::SortSettings;
pub use state::{SortDefault, SortState};
pub use tracker::{load_state, update_state};

/// Request parameter carrying the column to sort by
pub const SORT_KEY_PARAM: &str = "sort_key";
/// Request parameter carrying the sort direction
pub const SORT_ORDER_PARAM: &str = "sort_order";

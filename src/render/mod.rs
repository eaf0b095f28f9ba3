//! HTML rendering for sortable table headers
//!
//! Links and header cells are produced as [`maud::Markup`], ready to be
//! spliced into a maud template or written out with `into_string()`.

pub mod header;
pub mod href;
pub mod link;
pub mod titleize;

pub use header::{HeaderOptions, sort_header_cell};
pub use link::{sort_class, sort_link};
pub use href::sort_url;
pub use titleize::titleize;

//! Convenience re-exports for common sort-state usage

pub use crate::errors::SortError;
pub use crate::order::SortOrder;
pub use crate::request::RequestContext;
pub use crate::settings::SortSettings;
pub use crate::state::{SortDefault, SortState};
pub use crate::tracker::{load_state, update_state};
pub use crate::{SORT_KEY_PARAM, SORT_ORDER_PARAM};

//! Active sort column and direction

use crate::errors::SortError;
use crate::order::SortOrder;
use serde::{Deserialize, Serialize};

/// The column a table is sorted by and the direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub order: SortOrder,
}

/// Fallback state used before a client has picked a column
pub type SortDefault = SortState;

impl SortState {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Result<Self, SortError> {
        let key = key.into();
        if key.is_empty() {
            return Err(SortError::EmptyKey);
        }
        Ok(Self { key, order })
    }

    /// Sort clause for the query layer, e.g. `"last_name asc"`.
    ///
    /// The key is echoed verbatim. Nothing here escapes it or checks it
    /// against a column list, so a key that came from request parameters is
    /// attacker-controlled: check it before putting it in an ORDER BY.
    pub fn clause(&self) -> String {
        format!("{} {}", self.key, self.order)
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.key == column
    }

    /// Order a click on `column` should request: the opposite of the current
    /// order for the active column, `initial` for any other.
    pub fn next_order(&self, column: &str, initial: SortOrder) -> SortOrder {
        if self.is_active(column) {
            self.order.toggle()
        } else {
            initial
        }
    }

    /// Icon token for the active column ("sortasc" / "sortdesc")
    pub fn icon(&self, column: &str) -> Option<String> {
        self.is_active(column)
            .then(|| format!("sort{}", self.order.as_str()))
    }
}

//! Per-table sort settings
//!
//! Built once per request before the sort state is updated, then passed to
//! every later call.

use crate::errors::SortError;
use crate::order::SortOrder;
use crate::request::RequestContext;
use crate::state::{SortDefault, SortState};
use config::SortConfig;

/// Suffix appended to controller + action when no session name is given
pub const DEFAULT_SESSION_KEY_SUFFIX: &str = "_sort";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSettings {
    /// Session entry holding this table's sort state
    pub session_key: String,
    pub default_state: SortDefault,
}

impl SortSettings {
    /// Set the default sort column and order.
    ///
    /// The session key is `session_name` when given, otherwise
    /// `<controller><action>_sort`. Without a name the request must carry
    /// both controller and action.
    pub fn init(
        ctx: &RequestContext,
        default_key: &str,
        default_order: SortOrder,
        session_name: Option<&str>,
    ) -> Result<Self, SortError> {
        Self::init_with_suffix(
            ctx,
            default_key,
            default_order,
            session_name,
            DEFAULT_SESSION_KEY_SUFFIX,
        )
    }

    /// Like [`SortSettings::init`], taking the key suffix and, when
    /// `default_order` is `None`, the default order from configuration.
    pub fn from_config(
        ctx: &RequestContext,
        default_key: &str,
        default_order: Option<SortOrder>,
        session_name: Option<&str>,
        config: &SortConfig,
    ) -> Result<Self, SortError> {
        let default_order = match default_order {
            Some(order) => order,
            None => config.default_order.parse()?,
        };
        Self::init_with_suffix(
            ctx,
            default_key,
            default_order,
            session_name,
            &config.session_key_suffix,
        )
    }

    fn init_with_suffix(
        ctx: &RequestContext,
        default_key: &str,
        default_order: SortOrder,
        session_name: Option<&str>,
        suffix: &str,
    ) -> Result<Self, SortError> {
        let session_key = match session_name {
            Some(name) => name.to_string(),
            None => {
                let controller = ctx
                    .controller
                    .as_deref()
                    .ok_or(SortError::MissingRoute("controller"))?;
                let action = ctx
                    .action
                    .as_deref()
                    .ok_or(SortError::MissingRoute("action"))?;
                format!("{}{}{}", controller, action, suffix)
            }
        };

        Ok(Self {
            session_key,
            default_state: SortState::new(default_key, default_order)?,
        })
    }
}

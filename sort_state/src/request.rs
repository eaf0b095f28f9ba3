//! Per-request context
//!
//! The host framework fills this in from its routing data and query string.

use crate::{SORT_KEY_PARAM, SORT_ORDER_PARAM};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub controller: Option<String>,
    pub action: Option<String>,
    /// Path sort links point back to, e.g. `/contacts`
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_route(mut self, controller: impl Into<String>, action: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self.action = Some(action.into());
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Requested sort column; an empty value counts as absent
    pub fn sort_key(&self) -> Option<&str> {
        self.param(SORT_KEY_PARAM).filter(|key| !key.is_empty())
    }

    pub fn sort_order(&self) -> Option<&str> {
        self.param(SORT_ORDER_PARAM)
    }
}

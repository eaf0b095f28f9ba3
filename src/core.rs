//! Core SortKit functionality
//!
//! This module contains the SortHelper struct, which ties one table's sort
//! settings to the current request and the client's session.

use crate::errors::SortKitError;
use crate::render::{HeaderOptions, sort_header_cell, sort_link};
use config::SortConfig;
use maud::Markup;
use session_store::SessionStore;
use sort_state::{RequestContext, SortOrder, SortSettings, SortState, load_state, update_state};

/// Sort state helper for one sortable table within one request
pub struct SortHelper<'s, S: SessionStore + ?Sized> {
    store: &'s S,
    ctx: RequestContext,
    settings: SortSettings,
    config: SortConfig,
    state: Option<SortState>,
}

impl<S: SessionStore + ?Sized> std::fmt::Debug for SortHelper<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortHelper")
            .field("ctx", &self.ctx)
            .field("settings", &self.settings)
            .field("state", &self.state)
            .finish()
    }
}

impl<'s, S: SessionStore + ?Sized> SortHelper<'s, S> {
    /// Create a helper with the default configuration.
    ///
    /// The session key is `session_name` when given, otherwise
    /// `<controller><action>_sort`.
    pub fn init(
        store: &'s S,
        ctx: RequestContext,
        default_key: &str,
        default_order: SortOrder,
        session_name: Option<&str>,
    ) -> Result<Self, SortKitError> {
        Self::with_config(
            store,
            ctx,
            default_key,
            Some(default_order),
            session_name,
            SortConfig::default(),
        )
    }

    /// Create a helper with explicit configuration; `default_order: None`
    /// takes the configured default order.
    pub fn with_config(
        store: &'s S,
        ctx: RequestContext,
        default_key: &str,
        default_order: Option<SortOrder>,
        session_name: Option<&str>,
        config: SortConfig,
    ) -> Result<Self, SortKitError> {
        config.validate()?;
        let settings =
            SortSettings::from_config(&ctx, default_key, default_order, session_name, &config)?;
        debug_log!(
            "sort helper for {} defaults to {}",
            settings.session_key,
            settings.default_state.clause()
        );

        Ok(Self {
            store,
            ctx,
            settings,
            config,
            state: None,
        })
    }

    /// Resolve the sort state for this request and store it in the session
    pub async fn update(&mut self) -> Result<&SortState, SortKitError> {
        let state = update_state(self.store, &self.settings, &self.ctx).await?;
        trace_log!("{} -> {}", self.settings.session_key, state.clause());
        Ok(self.state.insert(state))
    }

    /// Re-read the sort state from the session
    pub async fn reload(&mut self) -> Result<&SortState, SortKitError> {
        let state = load_state(self.store, &self.settings).await?;
        Ok(self.state.insert(state))
    }

    pub fn state(&self) -> Result<&SortState, SortKitError> {
        self.state.as_ref().ok_or(SortKitError::StateNotLoaded)
    }

    pub fn settings(&self) -> &SortSettings {
        &self.settings
    }

    pub fn request(&self) -> &RequestContext {
        &self.ctx
    }

    /// Sort clause for the query layer, e.g. `"last_name asc"`.
    ///
    /// The column comes straight from request parameters; see
    /// [`SortState::clause`] before using it in SQL.
    pub fn clause(&self) -> Result<String, SortKitError> {
        Ok(self.state()?.clause())
    }

    pub fn next_order(&self, column: &str, initial: SortOrder) -> Result<SortOrder, SortKitError> {
        Ok(self.state()?.next_order(column, initial))
    }

    pub fn sort_icon(&self, column: &str) -> Result<Option<String>, SortKitError> {
        Ok(self.state()?.icon(column))
    }

    /// Sort link with the titleized column name, starting ascending
    pub fn link(&self, column: &str) -> Result<Markup, SortKitError> {
        self.link_with(column, None, SortOrder::Asc)
    }

    pub fn link_with(
        &self,
        column: &str,
        caption: Option<&str>,
        initial: SortOrder,
    ) -> Result<Markup, SortKitError> {
        Ok(sort_link(
            self.state()?,
            &self.ctx,
            &self.config,
            column,
            caption,
            initial,
        ))
    }

    /// `<th>` cell wrapping a sort link
    pub fn header_cell(
        &self,
        column: &str,
        options: &HeaderOptions,
    ) -> Result<Markup, SortKitError> {
        Ok(sort_header_cell(
            self.state()?,
            &self.ctx,
            &self.config,
            column,
            options,
        ))
    }
}

//! Session store contract
//!
//! The host web framework owns the session; the sort helper only needs to
//! read and write one structured value under a string key.

use crate::errors::SessionError;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Per-client key/value session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Value>, SessionError>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: Value) -> Result<(), SessionError>;
}

#[async_trait]
impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    async fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
        (**self).set(key, value).await
    }
}

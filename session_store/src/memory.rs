//! In-memory session backend
//!
//! Useful for tests, demos and hosts that keep their session data in process.

use crate::errors::SessionError;
use crate::store::SessionStore;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session entries for a single client, kept in memory
///
/// Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemorySession {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl std::fmt::Debug for MemorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entry_count = match self.entries.try_read() {
            Ok(entries) => entries.len().to_string(),
            Err(_) => "locked".to_string(),
        };

        f.debug_struct("MemorySession")
            .field("entries", &entry_count)
            .finish()
    }
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySession {
    async fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_missing_key() {
        let session = MemorySession::new();
        assert_eq!(session.get("contactslist_sort").await.unwrap(), None);
        assert!(session.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let session = MemorySession::new();
        session
            .set("contactslist_sort", json!({"key": "id", "order": "asc"}))
            .await
            .unwrap();

        let value = session.get("contactslist_sort").await.unwrap();
        assert_eq!(value, Some(json!({"key": "id", "order": "asc"})));
        assert_eq!(session.len().await, 1);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let session = MemorySession::new();
        session.set("k", json!(1)).await.unwrap();
        session.set("k", json!(2)).await.unwrap();

        assert_eq!(session.get("k").await.unwrap(), Some(json!(2)));
        assert_eq!(session.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let session = MemorySession::new();
        let other = session.clone();
        other.set("k", json!("v")).await.unwrap();

        assert_eq!(session.get("k").await.unwrap(), Some(json!("v")));
    }

    #[tokio::test]
    async fn test_arc_store_delegates() {
        let session: Arc<dyn SessionStore> = Arc::new(MemorySession::new());
        session.set("k", json!(true)).await.unwrap();
        assert_eq!(session.get("k").await.unwrap(), Some(json!(true)));
    }
}

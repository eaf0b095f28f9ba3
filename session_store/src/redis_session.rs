//! Redis-backed client session
//!
//! Binds a [`RedisSessionManager`] to one session id so it can be handed to
//! the sort helper as a [`SessionStore`].

use crate::errors::SessionError;
use crate::manager::RedisSessionManager;
use crate::store::SessionStore;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// One client's session stored in Redis
#[derive(Debug, Clone)]
pub struct RedisSession {
    /// The shared manager instance
    pub manager: Arc<RedisSessionManager>,
    /// Session id issued by the host framework (cookie value)
    pub session_id: String,
}

impl RedisSession {
    pub fn new(manager: Arc<RedisSessionManager>, session_id: &str) -> Result<Self, SessionError> {
        // Ids become part of the Redis key
        if session_id.is_empty() || session_id.contains([':', '*', ' ']) {
            return Err(SessionError::InvalidSessionId(session_id.to_string()));
        }

        Ok(Self {
            manager,
            session_id: session_id.to_string(),
        })
    }
}

#[async_trait]
impl SessionStore for RedisSession {
    async fn get(&self, key: &str) -> Result<Option<Value>, SessionError> {
        self.manager.get_entry(&self.session_id, key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), SessionError> {
        self.manager.set_entry(&self.session_id, key, &value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::SessionConfig;

    fn manager() -> Arc<RedisSessionManager> {
        Arc::new(RedisSessionManager::new(SessionConfig::default()).unwrap())
    }

    #[test]
    fn test_valid_session_id() {
        let session = RedisSession::new(manager(), "f3a9c0de").unwrap();
        assert_eq!(session.session_id, "f3a9c0de");
    }

    #[test]
    fn test_rejects_key_breaking_ids() {
        for id in ["", "a:b", "abc*", "a b"] {
            assert!(
                matches!(
                    RedisSession::new(manager(), id),
                    Err(SessionError::InvalidSessionId(_))
                ),
                "id {:?} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_manager_hands_out_sessions() {
        let session = manager().session("client-1").unwrap();
        assert_eq!(session.session_id, "client-1");
    }
}

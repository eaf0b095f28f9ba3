//! Redis session manager implementation
//!
//! This module provides the RedisSessionManager struct
//! for Redis operations and connection management.

use crate::errors::SessionError;
use crate::redis_session::RedisSession;
use config::SessionConfig;
use redis::{AsyncCommands, Client};
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Redis-backed session manager shared by all client sessions
#[derive(Clone)]
pub struct RedisSessionManager {
    client: Arc<Client>,
    config: Arc<SessionConfig>,
    connection_pool: Arc<RwLock<Option<redis::aio::MultiplexedConnection>>>,
}

impl Debug for RedisSessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let connection_status = {
            match self.connection_pool.try_read() {
                Ok(pool) => {
                    if pool.is_some() {
                        "connected"
                    } else {
                        "no_connection"
                    }
                }
                Err(_) => "lock_error",
            }
        };

        f.debug_struct("RedisSessionManager")
            .field("config", &self.config)
            .field("connected", &connection_status)
            .finish()
    }
}

impl RedisSessionManager {
    /// Create a new session manager; the connection is opened lazily
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        if config.ttl_seconds == 0 {
            return Err(SessionError::InvalidTtl(config.ttl_seconds));
        }
        let client = Client::open(config.redis_url.as_str())?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
            connection_pool: Arc::new(RwLock::new(None)),
        })
    }

    /// Handle for one client's session
    pub fn session(&self, session_id: &str) -> Result<RedisSession, SessionError> {
        RedisSession::new(Arc::new(self.clone()), session_id)
    }

    /// Get or create Redis connection
    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, SessionError> {
        let mut pool = self.connection_pool.write().await;

        if pool.is_none() {
            let timeout = Duration::from_millis(self.config.connection_timeout_ms);
            let connection =
                tokio::time::timeout(timeout, self.client.get_multiplexed_async_connection())
                    .await
                    .map_err(|_| SessionError::Timeout)??;
            tracing::debug!("opened redis session connection");
            *pool = Some(connection);
        }

        Ok(pool
            .as_ref()
            .ok_or_else(|| SessionError::Connection("Failed to get connection from pool".into()))?
            .clone())
    }

    /// Generate storage key for a session entry
    fn build_entry_key(&self, session_id: &str, key: &str) -> String {
        format!("{}:session:{}:{}", self.config.key_prefix, session_id, key)
    }

    /// Get a session entry
    pub async fn get_entry(
        &self,
        session_id: &str,
        key: &str,
    ) -> Result<Option<Value>, SessionError> {
        let entry_key = self.build_entry_key(session_id, key);
        let mut conn = self.get_connection().await?;

        let stored: Option<String> = conn.get(&entry_key).await?;

        match stored {
            Some(json_str) => Ok(Some(serde_json::from_str(&json_str)?)),
            None => Ok(None),
        }
    }

    /// Set a session entry, refreshing its TTL
    pub async fn set_entry(
        &self,
        session_id: &str,
        key: &str,
        value: &Value,
    ) -> Result<(), SessionError> {
        let entry_key = self.build_entry_key(session_id, key);
        let json_str = serde_json::to_string(value)?;
        let mut conn = self.get_connection().await?;

        let _: () = conn
            .set_ex(&entry_key, &json_str, self.config.ttl_seconds)
            .await?;
        Ok(())
    }

    /// Remaining TTL of a session entry in seconds (-2 when missing)
    pub async fn entry_ttl(&self, session_id: &str, key: &str) -> Result<i64, SessionError> {
        let entry_key = self.build_entry_key(session_id, key);
        let mut conn = self.get_connection().await?;

        let ttl: i64 = conn.ttl(&entry_key).await?;
        Ok(ttl)
    }

    /// Ping Redis to check connectivity
    pub async fn ping(&self) -> Result<String, SessionError> {
        let mut conn = self.get_connection().await?;

        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong)
    }

    /// Get current configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_layout() {
        let manager =
            RedisSessionManager::new(SessionConfig::default().with_key_prefix("app")).unwrap();
        assert_eq!(
            manager.build_entry_key("abc123", "contactslist_sort"),
            "app:session:abc123:contactslist_sort"
        );
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = SessionConfig::new("redis://localhost:6379".to_string(), 0);
        assert!(matches!(
            RedisSessionManager::new(config),
            Err(SessionError::InvalidTtl(0))
        ));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let config = SessionConfig::new("not a redis url".to_string(), 60);
        assert!(matches!(
            RedisSessionManager::new(config),
            Err(SessionError::ConnectionError(_))
        ));
    }

    #[test]
    fn test_debug_reports_no_connection() {
        let manager = RedisSessionManager::new(SessionConfig::default()).unwrap();
        let debug = format!("{:?}", manager);
        assert!(debug.contains("no_connection"));
    }
}

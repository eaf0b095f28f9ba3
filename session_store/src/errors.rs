//! Error types for session operations
//!
//! This module defines all error types that can occur
//! while reading or writing session entries.

use thiserror::Error;

/// Session store errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Redis connection error: {0}")]
    ConnectionError(#[from] redis::RedisError),

    #[error("Connection pool error: {0}")]
    Connection(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Session operation timeout")]
    Timeout,

    #[error("Invalid TTL value: {0}")]
    InvalidTtl(u64),

    #[error("Invalid session id: {0:?}")]
    InvalidSessionId(String),
}

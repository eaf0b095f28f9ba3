//! Convenience re-exports for common session-store usage

// Core session components
pub use crate::errors::SessionError;
pub use crate::manager::RedisSessionManager;
pub use crate::memory::MemorySession;
pub use crate::redis_session::RedisSession;
pub use crate::store::SessionStore;

// Re-export centralized config
pub use config::SessionConfig;

// Common external dependencies
pub use async_trait::async_trait;

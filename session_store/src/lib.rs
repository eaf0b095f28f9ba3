//! Session storage for sort state
//!
//! This crate provides the key/value session contract the sort helper writes to,
//! with an in-memory backend and a Redis-backed one.

pub mod errors;
pub mod manager;
pub mod memory;
pub mod prelude;
pub mod redis_session;
pub mod store;

// Re-export centralized config
pub use config::SessionConfig;

pub use errors::SessionError;
pub use manager::RedisSessionManager;
pub use memory::MemorySession;
pub use redis_session::RedisSession;
pub use store::SessionStore;

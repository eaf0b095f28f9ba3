//! Error types for the SortKit crate
//!
//! This module contains all error types that can be returned by SortKit operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortKitError {
    #[error("Sort state error: {0}")]
    Sort(#[from] sort_state::SortError),

    #[error("Session error: {0}")]
    Session(#[from] session_store::SessionError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Sort state not loaded: call update() before rendering or building the clause")]
    StateNotLoaded,
}

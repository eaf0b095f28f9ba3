use session_store::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    #[error("Cannot derive a session key: request has no {0} and no session name was given")]
    MissingRoute(&'static str),

    #[error("Sort key cannot be empty")]
    EmptyKey,

    #[error("Invalid sort order: {0:?} (expected \"asc\" or \"desc\")")]
    InvalidOrder(String),

    #[error("No sort state stored under {0:?}; call update_state first")]
    NotInitialized(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

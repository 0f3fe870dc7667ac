//! # Store Errors
//!
//! Failures raised by the store plumbing itself. Record-specific failures travel
//! inside [`StoreError::Entity`].

/// Errors that can occur while talking to a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    Closed,
    #[error("Store actor dropped response channel")]
    Dropped,
    #[error("Store has no identifiers left")]
    IdsExhausted,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

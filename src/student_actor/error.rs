//! Error types for the Student actor.

use crate::model::StudentId;
use thiserror::Error;

/// Errors that can occur during student operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StudentError {
    /// Rendered verbatim as the HTTP 404 detail.
    #[error("Student not found")]
    NotFound(StudentId),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

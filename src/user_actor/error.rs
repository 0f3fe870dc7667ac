//! Error types for the User actor.

use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during user operations.
///
/// The domain variants render as the exact replies of the command interpreter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// No live user has this identifier.
    #[error("User {0} not found.")]
    NotFound(UserId),

    /// Another live user already holds this email.
    #[error("Email already exists.")]
    EmailTaken(String),

    /// The user store could not be reached.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

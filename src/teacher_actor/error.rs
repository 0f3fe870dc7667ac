//! Error types for the Teacher actor.

use crate::model::TeacherId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TeacherError {
    #[error("Teacher not found")]
    NotFound(TeacherId),

    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

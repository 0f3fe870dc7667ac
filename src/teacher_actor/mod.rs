//! # Teacher Actor
//!
//! CRUD store behind the `/teachers/` endpoints.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TeacherClient;
use crate::model::Teacher;
use record_actor::RecordActor;

/// Creates a new Teacher actor and its client.
pub fn new(buffer_size: usize) -> (RecordActor<Teacher>, TeacherClient) {
    let (actor, inner) = RecordActor::new(buffer_size);
    (actor, TeacherClient::new(inner))
}

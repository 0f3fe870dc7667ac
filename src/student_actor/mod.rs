//! # Student Actor
//!
//! Plain CRUD store behind the `/students/` endpoints. No custom rules beyond
//! identity by id.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::StudentClient;
use crate::model::Student;
use record_actor::RecordActor;

/// Creates a new Student actor and its client.
pub fn new(buffer_size: usize) -> (RecordActor<Student>, StudentClient) {
    let (actor, inner) = RecordActor::new(buffer_size);
    (actor, StudentClient::new(inner))
}

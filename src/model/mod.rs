//! Plain record types and their create/update payloads.
//!
//! Each record implements [`RecordEntity`](record_actor::RecordEntity) in its
//! resource module ([`crate::user_actor`], [`crate::student_actor`],
//! [`crate::teacher_actor`]).

pub mod student;
pub mod teacher;
pub mod user;

pub use student::*;
pub use teacher::*;
pub use user::*;

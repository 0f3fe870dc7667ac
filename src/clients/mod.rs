//! Typed wrappers around [`StoreClient`](record_actor::StoreClient), one per resource.

pub mod student_client;
pub mod teacher_client;
pub mod user_client;

pub use student_client::*;
pub use teacher_client::*;
pub use user_client::*;

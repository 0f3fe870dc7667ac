//! # User Actor
//!
//! The store behind the command interpreter. Users have no dependencies on other
//! stores, so the context is `()`.
//!
//! - [`entity`]: [`RecordEntity`](record_actor::RecordEntity) implementation for [`User`]
//! - [`error`]: [`UserError`], whose `Display` strings are the interpreter's replies
//! - [`new()`]: builds the actor and its [`UserClient`]
//!
//! ```rust
//! use roster::model::UserCreate;
//! use roster::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .add_user(UserCreate {
//!             name: "Ana".into(),
//!             age: 20,
//!             gender: "f".into(),
//!             email: "ana@x.com".into(),
//!         })
//!         .await?;
//!     assert_eq!(id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use record_actor::RecordActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (RecordActor<User>, UserClient) {
    let (actor, inner) = RecordActor::new(buffer_size);
    (actor, UserClient::new(inner))
}

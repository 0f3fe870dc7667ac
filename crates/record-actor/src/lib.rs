//! # Record Actor
//!
//! Generic in-memory record stores built on the actor model. Each store is a Tokio task
//! that owns its records outright and serves create/get/update/delete/list requests
//! from a mailbox, one at a time. Callers talk to it through a cheap, cloneable
//! [`StoreClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`RecordEntity`]): the record type, its payloads and hooks.
//! 2. **Runtime** ([`RecordActor`]): the mailbox loop and the id counter.
//! 3. **Interface** ([`StoreClient`], [`RecordClient`]): typed request/response calls.
//!
//! ## Identifiers
//!
//! Every store assigns identifiers from a counter that starts at 1 and never goes
//! back. Deleting record 2 of 3 and then creating a record yields 4, not 3. Records are
//! kept ordered by identifier, which is also their insertion order.
//!
//! ## Concurrency Model
//!
//! - One task per store, requests handled sequentially, no locks on store state.
//! - Stores run in parallel with each other.
//! - A store stops once every client clone is dropped.
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers client requests from scripted expectations so code
//! above the client can be tested without a live store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::RecordActor;
pub use client::StoreClient;
pub use client_trait::RecordClient;
pub use entity::RecordEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};

//! # RecordEntity Trait
//!
//! The contract every record type (User, Student, Teacher) implements so the generic
//! [`RecordActor`](crate::RecordActor) can store it. It names the identifier, the
//! create/update payloads, the injected context and the error type, and offers
//! lifecycle hooks that may veto an operation.
//!
//! # Provided Methods (Hooks)
//! - [`RecordEntity::on_create`]
//! - [`RecordEntity::on_delete`]
//!
//! Both default to `Ok(())`. Only [`RecordEntity::on_update`] must be written, since
//! partial updates are always record specific.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record must implement to be managed by a `RecordActor`.
///
/// # Identifiers
/// The actor hands out identifiers from its own counter, so `Id` must be
/// constructible from `u32`. It must also be `Ord`: the store is kept sorted by
/// identifier, and because the counter only grows, identifier order is insertion order.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other clients. The `Context` is passed
/// to `run()` rather than `new()`, which lets actors be wired after construction.
#[async_trait]
pub trait RecordEntity: Clone + Debug + Send + Sync + 'static {
    /// Identifier type, e.g. a `u32` newtype.
    type Id: Ord + Copy + Send + Sync + Display + Debug + From<u32>;

    /// Fields required to create a record.
    type Create: Send + Sync + Debug;

    /// Partial update payload; absent fields keep their value.
    type Update: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` if none.
    type Context: Send + Sync;

    /// Error returned by hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from its assigned identifier and the create payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update. The actor calls this on a copy and only commits it on `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

//! # RecordClient Trait
//!
//! Shared read/update/delete surface for resource-specific clients, built on a
//! [`StoreClient`].
use crate::{RecordEntity, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait that resource clients implement to inherit `fetch`, `fetch_all`, `modify`
/// and `remove`.
///
/// Implementors supply access to the inner [`StoreClient`], the error for a missing
/// identifier, and a mapping for every other [`StoreError`].
///
/// ```rust
/// use record_actor::{RecordClient, RecordEntity, StoreClient, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// #[async_trait]
/// impl RecordEntity for Tag {
///     type Id = u32; type Create = TagCreate; type Update = TagUpdate;
///     type Context = (); type Error = TagError;
///     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, TagError> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// struct TagClient { inner: StoreClient<Tag> }
///
/// impl RecordClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &StoreClient<Tag> { &self.inner }
///     fn not_found(id: u32) -> TagError { TagError(format!("tag {id} not found")) }
///     fn map_error(e: StoreError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     let _ = client.fetch(1).await;
///     let _ = client.fetch_all().await;
/// }
/// ```
#[async_trait]
pub trait RecordClient<T: RecordEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner store client.
    fn inner(&self) -> &StoreClient<T>;

    /// The error reported when `id` is not in the store.
    fn not_found(id: T::Id) -> Self::Error;

    /// Map any other store error to the resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Like `map_error`, but keeps a missing record distinguishable.
    fn map_error_for(id: T::Id, e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(_) => Self::not_found(id),
            other => Self::map_error(other),
        }
    }

    /// Fetch a record by identifier.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Apply a partial update, returning the new state.
    #[tracing::instrument(skip(self))]
    async fn modify(&self, id: T::Id, update: T::Update) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .update(id, update)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }

    /// Remove a record, returning it.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .delete(id)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }

    /// Every live record in identifier order.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}

//! # Record Actor
//!
//! The server half of a record store. A `RecordActor` owns the records of one type and
//! processes requests one at a time from its mailbox, so the store needs no locks.

use crate::client::StoreClient;
use crate::entity::RecordEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Generic single-writer store for records of type `T`.
///
/// The actor keeps a `BTreeMap` from identifier to record and a `next_id` counter.
/// The counter starts at 1 and only moves forward, so an identifier is never handed
/// out twice, even after the record holding it is deleted. Once it would pass
/// `u32::MAX` every create fails with [`StoreError::IdsExhausted`].
///
/// ## Operations
///
/// * **Create**: takes `next_id`, builds the record with `from_create_params`, runs
///   `on_create`, inserts it. A rejected create still consumes the identifier.
/// * **Get**: clones the record if present.
/// * **Update**: runs `on_update` against a copy and swaps it in only on success.
/// * **Delete**: runs `on_delete`, removes the record and returns it.
/// * **List**: clones every record in identifier order.
///
/// ```rust
/// use record_actor::{RecordActor, RecordEntity};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate(Option<String>);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl RecordEntity for Note {
///     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
///     type Context = (); type Error = NoteError;
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: p.0 })
///     }
///     async fn on_update(&mut self, u: NoteUpdate, _: &()) -> Result<(), NoteError> {
///         if let Some(text) = u.0 { self.text = text; }
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Note>::new(8);
///     tokio::spawn(actor.run(()));
///     let id = client.create(NoteCreate("hello".into())).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().text, "hello");
/// }
/// ```
pub struct RecordActor<T: RecordEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: RecordEntity> RecordActor<T> {
    /// Creates an actor and its client.
    ///
    /// `buffer_size` is the mailbox capacity; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to each entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "User" rather than "roster::model::user::User"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(next) = self.next_id.checked_add(1) else {
                        warn!(entity_type, "Identifiers exhausted");
                        let _ = respond_to.send(Err(StoreError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(std::mem::replace(&mut self.next_id, next));
                    let _ = respond_to.send(self.create(id, params, &context, entity_type).await);
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let _ = respond_to.send(self.update(id, update, &context, entity_type).await);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let _ = respond_to.send(self.delete(id, &context, entity_type).await);
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T::Id, StoreError> {
        let mut item = T::from_create_params(id, params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            StoreError::Entity(Box::new(e))
        })?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(StoreError::Entity(Box::new(e)));
        }
        self.store.insert(id, item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T, StoreError> {
        let Some(current) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        let mut next = current.clone();
        if let Err(e) = next.on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(StoreError::Entity(Box::new(e)));
        }
        self.store.insert(id, next.clone());
        info!(entity_type, %id, "Updated");
        Ok(next)
    }

    async fn delete(
        &mut self,
        id: T::Id,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<T, StoreError> {
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(StoreError::Entity(Box::new(e)));
        }
        let removed = self
            .store
            .remove(&id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate(i64);

    #[derive(Debug)]
    struct CounterUpdate(i64);

    #[derive(Debug, thiserror::Error)]
    #[error("counter would go negative")]
    struct Negative;

    #[async_trait]
    impl RecordEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = CounterUpdate;
        type Context = ();
        type Error = Negative;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Negative> {
            if params.0 < 0 {
                return Err(Negative);
            }
            Ok(Self { id, value: params.0 })
        }

        async fn on_update(&mut self, update: CounterUpdate, _ctx: &()) -> Result<(), Negative> {
            // Mutate first so a rollback is observable.
            self.value += update.0;
            if self.value < 0 {
                return Err(Negative);
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn rejected_update_leaves_record_untouched() {
        let (actor, client) = RecordActor::<Counter>::new(4);
        tokio::spawn(actor.run(()));

        let id = client.create(CounterCreate(5)).await.unwrap();
        let result = client.update(id, CounterUpdate(-10)).await;
        assert!(matches!(result, Err(StoreError::Entity(_))));

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.value, 5);
    }

    #[tokio::test]
    async fn rejected_create_consumes_identifier() {
        let (actor, client) = RecordActor::<Counter>::new(4);
        tokio::spawn(actor.run(()));

        assert!(client.create(CounterCreate(-1)).await.is_err());
        let id = client.create(CounterCreate(1)).await.unwrap();
        assert_eq!(id, 2);
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_fails_once_identifiers_run_out() {
        let (mut actor, client) = RecordActor::<Counter>::new(4);
        actor.next_id = u32::MAX - 1;
        tokio::spawn(actor.run(()));

        assert_eq!(client.create(CounterCreate(1)).await.unwrap(), u32::MAX - 1);
        for _ in 0..2 {
            assert!(matches!(
                client.create(CounterCreate(1)).await,
                Err(StoreError::IdsExhausted)
            ));
        }
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let (actor, client) = RecordActor::<Counter>::new(4);
        tokio::spawn(actor.run(()));

        assert!(matches!(
            client.update(9, CounterUpdate(1)).await,
            Err(StoreError::NotFound(id)) if id == "9"
        ));
        assert!(matches!(client.delete(9).await, Err(StoreError::NotFound(_))));
        assert!(client.get(9).await.unwrap().is_none());
    }
}

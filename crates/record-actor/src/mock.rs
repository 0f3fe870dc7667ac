//! # Mock Store
//!
//! [`MockStore<T>`] hands out a real [`StoreClient<T>`] whose requests are answered from
//! a queue of expectations instead of a running actor. Use it to test code that sits
//! on top of a client (domain rules, request handlers) without spawning the store, and
//! to inject failures that a live actor would never produce.
//!
//! | | MockStore | RecordActor |
//! |---|---|---|
//! | State | scripted replies | real records |
//! | Order | strict FIFO | whatever the caller does |
//! | Error injection | `return_err` | hard |
//!
//! ```rust
//! use record_actor::mock::MockStore;
//! use record_actor::{RecordEntity, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("item")] struct ItemError;
//!
//! #[async_trait]
//! impl RecordEntity for Item {
//!     type Id = u32; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Context = (); type Error = ItemError;
//!     fn from_create_params(id: u32, _: ItemCreate) -> Result<Self, ItemError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), ItemError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Item>::new();
//!     mock.expect_get(1).return_err(StoreError::Closed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(StoreError::Closed)));
//!     mock.verify();
//! }
//! ```

use crate::client::StoreClient;
use crate::entity::RecordEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted reply for the next request.
enum Expectation<T: RecordEntity> {
    Get(T::Id, Result<Option<T>, StoreError>),
    Create(Result<T::Id, StoreError>),
    Update(T::Id, Result<T, StoreError>),
    Delete(T::Id, Result<T, StoreError>),
    List(Result<Vec<T>, StoreError>),
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A store stand-in that answers requests from a FIFO of expectations.
///
/// A request that does not match the head of the queue (wrong operation or wrong
/// identifier) panics the responder task, which the caller observes as
/// [`StoreError::Dropped`].
pub struct MockStore<T: RecordEntity> {
    client: StoreClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RecordEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordEntity> MockStore<T> {
    /// Creates a mock with an empty expectation queue. Must be called inside a runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                match (request, next) {
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get(want, reply)))
                        if id == want =>
                    {
                        let _ = respond_to.send(reply);
                    }
                    (StoreRequest::Create { respond_to, .. }, Some(Expectation::Create(reply))) => {
                        let _ = respond_to.send(reply);
                    }
                    (
                        StoreRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update(want, reply)),
                    ) if id == want => {
                        let _ = respond_to.send(reply);
                    }
                    (
                        StoreRequest::Delete { id, respond_to },
                        Some(Expectation::Delete(want, reply)),
                    ) if id == want => {
                        let _ = respond_to.send(reply);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List(reply))) => {
                        let _ = respond_to.send(reply);
                    }
                    (request, _) => panic!("Unexpected request: {request:?}"),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Box::new(move |reply| Expectation::Get(id, reply)))
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Box::new(Expectation::Create))
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |reply| Expectation::Update(id, reply)))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Box::new(move |reply| Expectation::Delete(id, reply)))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Box::new(Expectation::List))
    }

    fn builder<R>(&self, wrap: Wrap<T, R>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>;

/// Completes an expectation with its scripted reply.
pub struct ExpectationBuilder<T: RecordEntity, R> {
    expectations: Queue<T>,
    wrap: Wrap<T, R>,
}

impl<T: RecordEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, reply: Result<R, StoreError>) {
        let expectation = (self.wrap)(reply);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Badge {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct BadgeCreate {
        label: String,
    }

    #[derive(Debug)]
    struct BadgeUpdate;

    #[derive(Debug, thiserror::Error)]
    #[error("badge error")]
    struct BadgeError;

    #[async_trait]
    impl RecordEntity for Badge {
        type Id = u32;
        type Create = BadgeCreate;
        type Update = BadgeUpdate;
        type Context = ();
        type Error = BadgeError;

        fn from_create_params(id: u32, params: BadgeCreate) -> Result<Self, BadgeError> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: BadgeUpdate, _: &()) -> Result<(), BadgeError> {
            Ok(())
        }
    }

    fn badge(id: u32, label: &str) -> Badge {
        Badge {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn replies_in_order() {
        let mut mock = MockStore::<Badge>::new();
        mock.expect_create().return_ok(7);
        mock.expect_list().return_ok(vec![badge(7, "gold")]);
        mock.expect_delete(7).return_ok(badge(7, "gold"));

        let client = mock.client();
        let id = client
            .create(BadgeCreate {
                label: "gold".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 7);
        assert_eq!(client.list().await.unwrap(), vec![badge(7, "gold")]);
        assert_eq!(client.delete(7).await.unwrap().label, "gold");

        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_identifier_drops_reply() {
        let mut mock = MockStore::<Badge>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(StoreError::Dropped)));
    }
}

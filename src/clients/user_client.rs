//! # User Client
//!
//! Domain operations on users. This is where email uniqueness lives: the store itself
//! only knows identifiers.
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use record_actor::{RecordClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: StoreClient<User>,
}

impl UserClient {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }
}

impl RecordClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &StoreClient<User> {
        &self.inner
    }

    fn not_found(id: UserId) -> Self::Error {
        UserError::NotFound(id)
    }

    fn map_error(e: StoreError) -> Self::Error {
        UserError::ActorCommunication(e.to_string())
    }
}

impl UserClient {
    /// Creates a user unless a live user already holds the same email.
    ///
    /// The check and the insert are two separate store requests, so two concurrent
    /// adds with the same email can both succeed.
    #[instrument(skip(self))]
    pub async fn add_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        let users = self.fetch_all().await?;
        if users.iter().any(|u| u.email == params.email) {
            info!(email = %params.email, "Email already registered");
            return Err(UserError::EmailTaken(params.email));
        }
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a partial update.
    ///
    /// A missing user is reported before an email conflict. On conflict nothing is
    /// applied, including the other fields of the same update.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        let users = self.fetch_all().await?;
        if !users.iter().any(|u| u.id == id) {
            return Err(UserError::NotFound(id));
        }
        if let Some(email) = &update.email {
            if users.iter().any(|u| u.id != id && &u.email == email) {
                info!(%id, %email, "Email already registered");
                return Err(UserError::EmailTaken(email.clone()));
            }
        }
        self.modify(id, update).await
    }

    pub async fn delete_user(&self, id: UserId) -> Result<User, UserError> {
        self.remove(id).await
    }

    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, UserError> {
        self.fetch(id).await
    }

    /// Every live user in insertion order.
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.fetch_all().await
    }
}

//! [`RecordEntity`] implementation for [`User`].

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use record_actor::RecordEntity;

#[async_trait]
impl RecordEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            age: params.age,
            gender: params.gender,
            email: params.email,
        })
    }

    /// Each field is replaced only when present in the update.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a [`User`], assigned by the user store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user managed through the command interpreter.
///
/// `email` is unique across live users. The store does not know that; the rule is
/// enforced by [`UserClient`](crate::clients::UserClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
}

/// Payload for creating a new user. Built by the command parser, never read from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreate {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub email: String,
}

/// Partial update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub email: Option<String>,
}

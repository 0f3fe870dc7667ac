use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a [`Student`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u32);

impl From<u32> for StudentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub grade: String,
}

/// Request body for `POST /students/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCreate {
    pub name: String,
    pub age: i32,
    pub grade: String,
}

/// Request body for `PUT /students/{id}`. Omitted fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub grade: Option<String>,
}

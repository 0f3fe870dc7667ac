use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a [`Teacher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeacherId(pub u32);

impl From<u32> for TeacherId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TeacherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub subject: String,
    /// Years of teaching experience.
    pub experience: i32,
}

/// Request body for `POST /teachers/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherCreate {
    pub name: String,
    pub subject: String,
    pub experience: i32,
}

/// Request body for `PUT /teachers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherUpdate {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub experience: Option<i32>,
}

use serde::{Deserialize, Serialize};

/// Response wrapper used by every endpoint: `{ "message": ..., "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// The part of a stored document we care about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Owner attached to a task. Serialized inline into [`NewTask`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    #[serde(rename = "assignedUser")]
    pub user_id: String,
    #[serde(rename = "assignedUserName")]
    pub user_name: String,
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub deadline: String,
    pub completed: bool,
    #[serde(flatten)]
    pub assignment: Option<Assignment>,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::forms::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Hex SHA-256 digest, never the plaintext. Kept out of serialized output.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUserForm {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Edit form: an empty password field means "keep the current one".
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserForm {
    pub email: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub password: Option<String>,
    pub role: String,
}

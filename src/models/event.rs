use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::forms::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub location: Option<String>,
    pub starts_on: Option<NaiveDate>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventForm {
    pub title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub starts_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
}

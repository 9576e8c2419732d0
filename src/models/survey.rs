use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::forms::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Survey {
    pub id: i32,
    pub participant_id: Option<i32>,
    pub title: String,
    pub score: Option<i32>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurveyForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub participant_id: Option<i32>,
    pub title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub score: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub comments: Option<String>,
}

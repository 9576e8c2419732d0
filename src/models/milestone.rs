use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::forms::empty_string_as_none;

/// A milestone belongs to exactly one participant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Milestone {
    pub id: i32,
    pub participant_id: i32,
    pub title: String,
    pub achieved_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneForm {
    pub participant_id: i32,
    pub title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub achieved_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

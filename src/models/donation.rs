use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::forms::empty_string_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    pub id: i32,
    pub donor_name: String,
    pub email: Option<String>,
    pub amount: Decimal,
    pub donated_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DonationForm {
    pub donor_name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    pub amount: Decimal,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub donated_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

//! Form deserialization helpers.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Browsers submit every input on a form, so optional fields arrive as empty
/// strings rather than being absent. Map `""` to `None` and parse anything
/// else with `FromStr`.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestForm {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        count: Option<i32>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        note: Option<String>,
    }

    #[test]
    fn empty_strings_become_none() {
        let form: TestForm =
            serde_json::from_str(r#"{"date": "", "count": "", "note": ""}"#).unwrap();
        assert!(form.date.is_none());
        assert!(form.count.is_none());
        assert!(form.note.is_none());
    }

    #[test]
    fn missing_fields_become_none() {
        let form: TestForm = serde_json::from_str("{}").unwrap();
        assert!(form.date.is_none());
        assert!(form.count.is_none());
        assert!(form.note.is_none());
    }

    #[test]
    fn populated_fields_parse() {
        let form: TestForm =
            serde_json::from_str(r#"{"date": "2024-05-01", "count": "7", "note": "call back"}"#)
                .unwrap();
        assert_eq!(form.date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(form.count, Some(7));
        assert_eq!(form.note.as_deref(), Some("call back"));
    }

    #[test]
    fn unparseable_values_are_an_error() {
        let result: Result<TestForm, _> = serde_json::from_str(r#"{"count": "seven"}"#);
        assert!(result.is_err());
    }
}

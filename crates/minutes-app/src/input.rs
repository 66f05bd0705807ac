//! Caller-side input validation.
//!
//! The engine accepts any text; shape errors are rejected here, before it
//! runs.

use chrono::NaiveDate;
use minutes_core::{MinutesError, Result};
use serde_json::Value;

/// A decoded `{"notes": "..."}` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    pub notes: String,
}

impl ExtractRequest {
    /// Decode a JSON request body. A missing or null `notes` is empty text.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let Value::Object(fields) = value else {
            return Err(MinutesError::InvalidInput(
                "request body must be a JSON object".to_string(),
            ));
        };
        let notes = match fields.get("notes") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(notes)) => notes.clone(),
            Some(_) => {
                return Err(MinutesError::InvalidInput(
                    "invalid 'notes' field, must be string".to_string(),
                ))
            }
        };
        Ok(Self { notes })
    }
}

/// Parse a `YYYY-MM-DD` reference date.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| MinutesError::InvalidDate(format!("{raw}: {e}")))
}

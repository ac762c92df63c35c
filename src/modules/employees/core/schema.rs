// Structural check of a projected view before it is persisted or returned.
//
// The view is checked as the JSON record callers receive: the expected
// attributes must be present with the expected JSON types, and `lastUpdated`
// must be an RFC 3339 date-time.

use crate::modules::employees::core::state::EmployeeView;
use chrono::DateTime;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("view is not a JSON object")]
    NotAnObject,

    #[error("missing required attribute `{0}`")]
    Missing(&'static str),

    #[error("attribute `{attribute}` should be a {expected}")]
    WrongType {
        attribute: &'static str,
        expected: &'static str,
    },

    #[error("view could not be encoded: {0}")]
    Encoding(String),
}

#[derive(Clone, Copy)]
enum Expected {
    String,
    Number,
    DateTime,
}

const REQUIRED: [(&str, Expected); 6] = [
    ("id", Expected::String),
    ("lastUpdated", Expected::DateTime),
    ("firstName", Expected::String),
    ("surname", Expected::String),
    ("amount", Expected::Number),
    ("version", Expected::Number),
];

pub fn validate_view(view: &EmployeeView) -> Result<(), SchemaViolation> {
    let value =
        serde_json::to_value(view).map_err(|e| SchemaViolation::Encoding(e.to_string()))?;
    validate_view_value(&value)
}

pub fn validate_view_value(value: &Value) -> Result<(), SchemaViolation> {
    let record = value.as_object().ok_or(SchemaViolation::NotAnObject)?;
    for (attribute, expected) in REQUIRED {
        let field = record
            .get(attribute)
            .ok_or(SchemaViolation::Missing(attribute))?;
        let ok = match expected {
            Expected::String => field.is_string(),
            Expected::Number => field.is_number(),
            Expected::DateTime => field
                .as_str()
                .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok()),
        };
        if !ok {
            return Err(SchemaViolation::WrongType {
                attribute,
                expected: match expected {
                    Expected::String => "string",
                    Expected::Number => "number",
                    Expected::DateTime => "date-time string",
                },
            });
        }
    }
    Ok(())
}

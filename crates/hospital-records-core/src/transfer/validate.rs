//! Field-level validation for transfer-shape construction.
//!
//! Construction is strict: a value must already carry the declared semantic
//! type. Integers must be JSON integers, dates ISO-8601 `YYYY-MM-DD` strings,
//! booleans JSON booleans. There is no coercion and no partial construction.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Semantic type expected for a transfer-shape field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Text,
    Date,
    Boolean,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldType::Integer => "integer",
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
        })
    }
}

/// Structured failure raised when a transfer shape cannot be constructed.
///
/// Always names the offending field and the type that was expected. A JSON
/// `null` counts as missing, the same as an absent key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field `{field}` (expected {expected})")]
    Missing { field: String, expected: FieldType },

    #[error("invalid value for field `{field}` (expected {expected})")]
    TypeMismatch { field: String, expected: FieldType },
}

impl ValidationError {
    pub(crate) fn missing(field: &str, expected: FieldType) -> Self {
        Self::Missing {
            field: field.to_string(),
            expected,
        }
    }

    pub(crate) fn mismatch(field: &str, expected: FieldType) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected,
        }
    }

    /// The offending field name.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field, .. } | Self::TypeMismatch { field, .. } => field,
        }
    }

    /// The type the field was expected to carry.
    pub fn expected(&self) -> FieldType {
        match self {
            Self::Missing { expected, .. } | Self::TypeMismatch { expected, .. } => *expected,
        }
    }
}

pub(crate) fn require_i64(map: &Map<String, Value>, field: &str) -> Result<i64, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field, FieldType::Integer)),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| ValidationError::mismatch(field, FieldType::Integer)),
        Some(_) => Err(ValidationError::mismatch(field, FieldType::Integer)),
    }
}

pub(crate) fn require_text(
    map: &Map<String, Value>,
    field: &str,
) -> Result<String, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field, FieldType::Text)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::mismatch(field, FieldType::Text)),
    }
}

pub(crate) fn require_date(
    map: &Map<String, Value>,
    field: &str,
) -> Result<NaiveDate, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field, FieldType::Date)),
        Some(Value::String(s)) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| ValidationError::mismatch(field, FieldType::Date)),
        Some(_) => Err(ValidationError::mismatch(field, FieldType::Date)),
    }
}

pub(crate) fn require_bool(map: &Map<String, Value>, field: &str) -> Result<bool, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(ValidationError::missing(field, FieldType::Boolean)),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ValidationError::mismatch(field, FieldType::Boolean)),
    }
}

/// Require an attribute that is nullable on the storage record but mandatory
/// on the transfer shape.
pub(crate) fn require_attr<T>(
    value: Option<T>,
    field: &str,
    expected: FieldType,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(field, expected))
}

use super::Error;
use crate::IndexType;
use serde_json::Value;

/// Error when an index key entry carries a marker outside the legal set.
#[derive(Debug)]
pub(super) struct InvalidFieldValue {
    field: Box<str>,
    value: Value,
}

impl std::error::Error for InvalidFieldValue {}

impl core::fmt::Display for InvalidFieldValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let legal = Value::Array(IndexType::ALL.iter().map(|ty| ty.to_json()).collect());

        // Strings are shown bare, everything else in its JSON spelling.
        let got = match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        write!(
            f,
            "index types must be one of {} - got '{}' for field '{}'",
            legal, got, self.field
        )
    }
}

impl Error {
    /// Creates an invalid field value error.
    ///
    /// Returned when a `key` entry's value is not one of `1`, `-1`,
    /// `"2dsphere"`, `"2d"`, `"geoHaystack"`, `"text"` or `"hashed"`.
    pub fn invalid_field_value(field: impl Into<String>, value: Value) -> Error {
        Error::from(super::ErrorKind::InvalidFieldValue(InvalidFieldValue {
            field: field.into().into(),
            value,
        }))
    }

    /// Returns `true` if this error is an invalid field value error.
    pub fn is_invalid_field_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFieldValue(_))
    }

    /// Returns the rejected marker if this is an invalid field value error.
    pub fn offending_value(&self) -> Option<&Value> {
        match self.kind() {
            super::ErrorKind::InvalidFieldValue(err) => Some(&err.value),
            _ => None,
        }
    }
}

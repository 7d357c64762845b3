use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Known index warning kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// `IXWARN_PREFIX`: the index is a prefix of another index.
    Prefix,

    /// `IXWARN_UNUSED`: the index has not been used since stats were reset.
    Unused,
}

impl WarningCode {
    pub const ALL: [WarningCode; 2] = [WarningCode::Prefix, WarningCode::Unused];

    pub fn as_i64(self) -> i64 {
        match self {
            WarningCode::Prefix => 1,
            WarningCode::Unused => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WarningCode::Prefix => "IXWARN_PREFIX",
            WarningCode::Unused => "IXWARN_UNUSED",
        }
    }
}

impl TryFrom<i64> for WarningCode {
    type Error = Error;

    fn try_from(code: i64) -> Result<WarningCode> {
        WarningCode::ALL
            .into_iter()
            .find(|known| known.as_i64() == code)
            .ok_or_else(|| Error::invalid_warning_code(code))
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for WarningCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// A warning attached to an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    code: WarningCode,
    message: String,
    details: String,
}

impl Warning {
    /// Builds a warning from a raw numeric code.
    ///
    /// Fails with an invalid warning code error for anything other than
    /// `1` or `2`.
    pub fn new(code: i64, message: impl Into<String>, details: impl Into<String>) -> Result<Warning> {
        Ok(Warning::from_code(
            WarningCode::try_from(code)?,
            message,
            details,
        ))
    }

    pub fn from_code(
        code: WarningCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Warning {
        Warning {
            code,
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn code(&self) -> WarningCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

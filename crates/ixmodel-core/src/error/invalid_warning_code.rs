use super::Error;
use crate::WarningCode;

/// Error when a warning is constructed with an unknown code.
#[derive(Debug)]
pub(super) struct InvalidWarningCode {
    code: i64,
}

impl std::error::Error for InvalidWarningCode {}

impl core::fmt::Display for InvalidWarningCode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let legal: Vec<String> = WarningCode::ALL
            .iter()
            .map(|code| code.as_i64().to_string())
            .collect();

        write!(
            f,
            "index warning codes must be one of [{}] - got '{}'",
            legal.join(","),
            self.code
        )
    }
}

impl Error {
    /// Creates an invalid warning code error.
    pub fn invalid_warning_code(code: i64) -> Error {
        Error::from(super::ErrorKind::InvalidWarningCode(InvalidWarningCode {
            code,
        }))
    }

    /// Returns `true` if this error is an invalid warning code error.
    pub fn is_invalid_warning_code(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidWarningCode(_))
    }
}

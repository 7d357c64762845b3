use super::Error;

/// Error when a descriptor record cannot be modeled at all.
///
/// This occurs when:
/// - The record is not a JSON object
/// - `key` is missing or is not an object
/// - A known attribute has the wrong shape (`name` is not a string,
///   `usageSince` is not a timestamp, ...)
#[derive(Debug)]
pub(super) struct InvalidRecord {
    message: Box<str>,
}

impl std::error::Error for InvalidRecord {}

impl core::fmt::Display for InvalidRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid index record: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid record error.
    pub fn invalid_record(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecord(InvalidRecord {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid record error.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecord(_))
    }
}

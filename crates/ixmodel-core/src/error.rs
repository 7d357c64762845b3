mod adhoc;
mod invalid_field_value;
mod invalid_record;
mod invalid_warning_code;

use adhoc::AdhocError;
use invalid_field_value::InvalidFieldValue;
use invalid_record::InvalidRecord;
use invalid_warning_code::InvalidWarningCode;
use std::sync::Arc;

/// An error raised while modeling an index descriptor.
///
/// Errors are one word wide. Context added with [`Error::context`] is
/// displayed before the root cause, separated by `": "`.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// The most recently added context is shown first, followed by earlier
    /// context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let unattached = match err.inner.as_mut().and_then(Arc::get_mut) {
            Some(inner) if inner.cause.is_none() => {
                inner.cause = Some(self);
                None
            }
            _ => Some(self),
        };

        // Shared or already-chained consequents are flattened to their message.
        match unattached {
            None => err,
            Some(cause) => Error {
                inner: Some(Arc::new(ErrorInner {
                    kind: ErrorKind::Adhoc(AdhocError::new(err.to_string())),
                    cause: Some(cause),
                })),
            },
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidFieldValue(InvalidFieldValue),
    InvalidWarningCode(InvalidWarningCode),
    InvalidRecord(InvalidRecord),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidFieldValue(err) => core::fmt::Display::fmt(err, f),
            InvalidWarningCode(err) => core::fmt::Display::fmt(err, f),
            InvalidRecord(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown index model error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("bad record: {}", 3));
        assert_eq!(err.to_string(), "bad record: 3");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn root_of_chain() {
        let err = Error::invalid_warning_code(7).context(err!("record 2"));
        assert!(err.root().is_invalid_warning_code());
        assert!(!err.is_invalid_warning_code());
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn serde_json_bridge() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let our_err: Error = json_err.into();
        assert!(our_err.to_string().contains("EOF"));
    }

    #[test]
    fn invalid_field_value_message() {
        let err = Error::invalid_field_value("foo", json!("someStrangeValue"));
        assert_eq!(
            err.to_string(),
            "index types must be one of [1,-1,\"2dsphere\",\"2d\",\"geoHaystack\",\"text\",\"hashed\"] - got 'someStrangeValue' for field 'foo'"
        );
        assert!(err.is_invalid_field_value());
        assert_eq!(err.offending_value(), Some(&json!("someStrangeValue")));
    }

    #[test]
    fn invalid_warning_code_message() {
        let err = Error::invalid_warning_code(3);
        assert_eq!(
            err.to_string(),
            "index warning codes must be one of [1,2] - got '3'"
        );
        assert!(err.is_invalid_warning_code());
    }

    #[test]
    fn invalid_record_with_context() {
        let err = Error::invalid_record("`key` must be an object")
            .context(err!("record #4 (name=seniors)"));
        assert_eq!(
            err.to_string(),
            "record #4 (name=seniors): invalid index record: `key` must be an object"
        );
    }
}

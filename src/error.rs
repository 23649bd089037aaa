mod adhoc;
mod invalid_argument;
mod invalid_mapping;

use adhoc::Adhoc;
use invalid_argument::InvalidArgument;
use invalid_mapping::InvalidMapping;

/// Returns early with a formatted [`Error`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates a formatted [`Error`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in rownest.
///
/// Every error is raised synchronously, before or during the fold, and is a
/// programmer-error class rather than a transient one: there is no recovery
/// policy and partial trees are never returned.
pub struct Error {
    inner: Box<ErrorInner>,
}

struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(Adhoc),
    Anyhow(anyhow::Error),
    InvalidArgument(InvalidArgument),
    InvalidMapping(InvalidMapping),
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    pub fn context(self, consequent: impl Into<Error>) -> Error {
        let mut err = consequent.into();
        debug_assert!(
            err.inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        err.inner.cause = Some(self);
        err
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = Some(self);
        core::iter::from_fn(move || {
            let next = err?;
            err = next.inner.cause.as_ref();
            Some(next)
        })
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
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            InvalidArgument(err) => core::fmt::Display::fmt(err, f),
            InvalidMapping(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(ErrorInner { kind, cause: None }),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adhoc_error_display() {
        let err = err!("test error: {}", 42);
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let chained = root.context(err!("top context"));
        assert_eq!(chained.to_string(), "top context: root cause");
    }

    #[test]
    fn anyhow_bridge() {
        let our_err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn invalid_argument_predicate() {
        let err = Error::invalid_argument("table must be a list of records");
        assert!(err.is_invalid_argument());
        assert!(!err.is_invalid_mapping());
        assert_eq!(
            err.to_string(),
            "invalid argument: table must be a list of records"
        );
    }

    #[test]
    fn invalid_mapping_predicate() {
        let err = Error::invalid_mapping("mapping has no properties");
        assert!(err.is_invalid_mapping());
        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid mapping: mapping has no properties");
    }
}

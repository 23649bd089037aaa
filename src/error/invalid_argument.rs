use super::Error;

/// Error when `nest` input is structurally invalid.
///
/// This occurs when:
/// - The table is not null, a record, or a list of records
/// - A row carries a numeric column name or a non-scalar cell
/// - The property mapping argument is neither null, a property mapping, nor
///   the prefer-list flag
///
/// Invalid input aborts the entire call; it is never partially hydrated.
#[derive(Debug)]
pub(super) struct InvalidArgument {
    message: Box<str>,
}

impl std::error::Error for InvalidArgument {}

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid argument: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidArgument(InvalidArgument {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidArgument(_))
    }
}

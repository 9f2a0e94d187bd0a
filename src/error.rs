//! Error types shared by every fallible routine in the crate.

use std::fmt;

/// Coarse classification of an [`Error`].
///
/// Tests and callers that only care about the class of a failure can match
/// on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument violated a documented precondition.
    InvalidArgument,
    /// Textual input could not be parsed.
    ParseFailure,
}

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A day token other than `mon`, `tue`, `wed`, `thu`, `fri`, `sat`, `sun`.
    UnknownDay(String),
    /// A sequence value outside the {0, 1, 2} domain.
    OutOfDomain { index: usize, value: u8 },
    /// A negative operand where a non-negative integer is required.
    NegativeOperand(i64),
    /// A circular arrangement needs at least one item.
    ZeroItems,
    /// The result of the named operation does not fit in the output type.
    Overflow(&'static str),
    /// Base-2 text containing anything but an optional leading sign and
    /// binary digits, or a value too large for the output type.
    MalformedBinary(String),
}

impl Error {
    /// Returns the coarse class of this error.
    ///
    /// # Examples
    /// ```
    /// use kata::{Error, ErrorKind};
    ///
    /// assert_eq!(Error::ZeroItems.kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(
    ///     Error::MalformedBinary("10x1".to_string()).kind(),
    ///     ErrorKind::ParseFailure
    /// );
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedBinary(_) => ErrorKind::ParseFailure,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownDay(token) => write!(f, "unknown day token: {token:?}"),
            Error::OutOfDomain { index, value } => {
                write!(f, "value {value} at index {index} is outside the {{0, 1, 2}} domain")
            }
            Error::NegativeOperand(n) => {
                write!(f, "operand {n} is negative, expected a non-negative integer")
            }
            Error::ZeroItems => write!(f, "a circular arrangement needs at least one item"),
            Error::Overflow(op) => write!(f, "{op} overflows the output type"),
            Error::MalformedBinary(s) => write!(f, "malformed base-2 text: {s:?}"),
        }
    }
}

impl std::error::Error for Error {}

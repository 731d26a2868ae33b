use alloc::collections::TryReserveError;
use core::fmt;
#[cfg(feature = "use-std")]
use std::error::Error as StdError;

/// Failure of a digest computation.
///
/// Every byte sequence is valid input, so the only way a digest call fails
/// is running out of memory for its output buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Alloc(TryReserveError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Alloc(ref e) => write!(f, "digest buffer allocation failed: {}", e),
        }
    }
}

impl From<TryReserveError> for Error {
    fn from(e: TryReserveError) -> Self { Error::Alloc(e) }
}

#[cfg(feature = "use-std")]
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::Alloc(ref e) => Some(e),
        }
    }
}

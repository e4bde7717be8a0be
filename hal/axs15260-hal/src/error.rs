//! Error classification for platform traits
//!
//! Mirrors the `embedded-hal` 1.0 error model: every platform error type
//! implements [`Error`] and can be reduced to an [`ErrorKind`] so that the
//! drivers can report failures without being generic over every
//! platform's error type.

use core::convert::Infallible;
use core::fmt::Debug;

/// Platform error
pub trait Error: Debug {
    /// Classify this error
    fn kind(&self) -> ErrorKind;
}

/// Generic platform error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The underlying channel failed to transfer the data
    Transport,
    /// The peripheral did not complete in time
    Timeout,
    /// The platform could not allocate a resource (frame buffer, DMA descriptor)
    OutOfMemory,
    /// The peripheral cannot perform the requested operation
    NotSupported,
    /// Anything else
    Other,
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

impl Error for Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport failure"),
            ErrorKind::Timeout => write!(f, "timed out"),
            ErrorKind::OutOfMemory => write!(f, "out of memory"),
            ErrorKind::NotSupported => write!(f, "not supported"),
            ErrorKind::Other => write!(f, "platform error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_identity() {
        for kind in [
            ErrorKind::Transport,
            ErrorKind::Timeout,
            ErrorKind::OutOfMemory,
            ErrorKind::NotSupported,
            ErrorKind::Other,
        ] {
            assert_eq!(kind.kind(), kind);
        }
    }
}

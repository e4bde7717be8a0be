//! Driver error types

use core::fmt;

use axs15260_hal::ErrorKind;
use embedded_hal::{digital, i2c};

/// Panel driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Bad configuration, init table or draw request
    InvalidArgument,
    /// The platform could not allocate the video frame buffer
    OutOfMemory,
    /// Command-mode transport failed
    Transport(ErrorKind),
    /// Video panel or DSI bus failed
    Video(ErrorKind),
    /// Reset pin failed
    Pin(digital::ErrorKind),
    /// Operation not available in the current configuration
    NotSupported,
}

impl PanelError {
    pub fn transport<E: axs15260_hal::Error>(err: E) -> Self {
        PanelError::Transport(err.kind())
    }

    pub fn video<E: axs15260_hal::Error>(err: E) -> Self {
        match err.kind() {
            ErrorKind::OutOfMemory => PanelError::OutOfMemory,
            ErrorKind::NotSupported => PanelError::NotSupported,
            kind => PanelError::Video(kind),
        }
    }

    pub fn pin<E: digital::Error>(err: E) -> Self {
        PanelError::Pin(err.kind())
    }

    /// Whether repeating the same call can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PanelError::Transport(_) | PanelError::Video(ErrorKind::Timeout)
        )
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::InvalidArgument => write!(f, "invalid argument"),
            PanelError::OutOfMemory => write!(f, "out of memory"),
            PanelError::Transport(kind) => write!(f, "command transport: {kind}"),
            PanelError::Video(kind) => write!(f, "video panel: {kind}"),
            PanelError::Pin(kind) => write!(f, "reset pin: {kind:?}"),
            PanelError::NotSupported => write!(f, "not supported"),
        }
    }
}

impl core::error::Error for PanelError {}

/// Touch driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// Bad configuration
    InvalidArgument,
    /// I2C transfer failed
    Bus(i2c::ErrorKind),
    /// Reset or interrupt pin failed
    Pin(digital::ErrorKind),
    /// Another read held the bus for too long
    Timeout,
}

impl TouchError {
    pub fn bus<E: i2c::Error>(err: E) -> Self {
        TouchError::Bus(err.kind())
    }

    pub fn pin<E: digital::Error>(err: E) -> Self {
        TouchError::Pin(err.kind())
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, TouchError::Timeout | TouchError::Bus(_))
    }
}

impl fmt::Display for TouchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TouchError::InvalidArgument => write!(f, "invalid argument"),
            TouchError::Bus(kind) => write!(f, "i2c: {kind}"),
            TouchError::Pin(kind) => write!(f, "touch pin: {kind:?}"),
            TouchError::Timeout => write!(f, "touch bus busy"),
        }
    }
}

impl core::error::Error for TouchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_out_of_memory_is_promoted() {
        assert_eq!(PanelError::video(ErrorKind::OutOfMemory), PanelError::OutOfMemory);
        assert_eq!(PanelError::video(ErrorKind::NotSupported), PanelError::NotSupported);
        assert_eq!(
            PanelError::video(ErrorKind::Transport),
            PanelError::Video(ErrorKind::Transport)
        );
    }

    #[test]
    fn test_transport_keeps_kind() {
        assert_eq!(
            PanelError::transport(ErrorKind::OutOfMemory),
            PanelError::Transport(ErrorKind::OutOfMemory)
        );
    }

    #[test]
    fn test_retryable() {
        assert!(TouchError::Timeout.is_retryable());
        assert!(!TouchError::InvalidArgument.is_retryable());
        assert!(!PanelError::InvalidArgument.is_retryable());
        assert!(!PanelError::OutOfMemory.is_retryable());
    }
}

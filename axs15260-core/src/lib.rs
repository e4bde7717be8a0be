//! Board-agnostic core of the AXS15260 drivers
//!
//! This crate contains everything the drivers share that does not touch
//! hardware:
//!
//! - Driver-facing traits (display panel, touch input)
//! - Configuration types
//! - Error types
//! - Panel lifecycle state machine

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod state;
pub mod traits;

pub use error::{PanelError, TouchError};

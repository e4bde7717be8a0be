//! AXS15260 driver implementations
//!
//! This crate provides the concrete drivers for the AXS15260 display/touch
//! controller, implementing the traits defined in `axs15260-core`:
//!
//! - [`panel::Axs15260Panel`] - MIPI-DSI panel: reset, command-mode
//!   initialization, then DPI video streaming
//! - [`touch::Axs15260Touch`] - I2C touch controller with interrupt
//!   notification

#![no_std]
#![deny(unsafe_code)]

// Must come first so the logging macros are visible to the other modules
#[macro_use]
mod fmt;

pub mod panel;
pub mod touch;

pub use panel::{Axs15260Panel, CommandMode, ControlChannel, VideoLink};
pub use touch::{Axs15260Touch, TouchSignal};

//! AXS15260 Hardware Abstraction Layer
//!
//! This crate defines the seams between the AXS15260 drivers and the
//! platform that owns the peripherals. The platform brings up GPIO, I2C and
//! the MIPI-DSI host; the drivers only ever talk to these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  axs15260-drivers (panel + touch)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  axs15260-hal (this crate - traits)     │
//! │  + embedded-hal (I2C, GPIO, delay)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  platform (MIPI-DSI host, GPIO, I2C)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`dbi::CommandTransport`] - Command-mode (DBI) register channel
//! - [`dsi::DsiBus`], [`dsi::VideoPanel`] - Video-mode (DPI) streaming
//! - [`gpio::InterruptPin`] - Edge interrupt capable input
//! - [`error::Error`] - Error classification shared by the platform traits
//!
//! Plain GPIO, I2C and delays use the `embedded-hal` 1.0 traits directly.

#![no_std]
#![deny(unsafe_code)]

pub mod dbi;
pub mod dsi;
pub mod error;
pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use dbi::{CommandTransport, DbiIoConfig};
pub use dsi::{DpiConfig, DsiBus, DsiBusConfig, PixelFormat, VideoPanel, VideoTiming};
pub use error::{Error, ErrorKind};
pub use gpio::{Edge, InterruptPin, NoPin};
pub use i2c::I2cConfig;

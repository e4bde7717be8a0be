//! AXS15260 wire formats
//!
//! Everything in this crate is pure data: no I/O, no timing. The drivers
//! feed bytes in and send bytes out.
//!
//! # Panel (MIPI-DSI, command mode)
//!
//! Each transaction is one DCS command byte followed by 0-64 parameters:
//! ```text
//! ┌─────┬──────────────────────┐   then wait `delay_ms`
//! │ CMD │ PARAMS (0-64 bytes)  │
//! └─────┴──────────────────────┘
//! ```
//! The vendor registers are only writable between the unlock and lock keys
//! on register 0xBB.
//!
//! # Touch (I2C, address 0x3B)
//!
//! The controller answers a plain 8-byte read with its status packet:
//! ```text
//! ┌─────────┬──────────────┬────────────────┬────────────────┬────────┬──────┐
//! │ GESTURE │ STATUS|COUNT │ EVT|X[11:8] X  │ ID|Y[11:8] Y   │ WEIGHT │ AREA │
//! │ 1B      │ 1B           │ 2B             │ 2B             │ 1B     │ 1B   │
//! └─────────┴──────────────┴────────────────┴────────────────┴────────┴──────┘
//! ```
//! Only the first contact fits in the packet.

#![no_std]
#![deny(unsafe_code)]

pub mod dcs;
pub mod events;
pub mod init;
pub mod touch;
pub mod transform;

pub use dcs::{ColorMode, ControlCommand, Madctl};
pub use events::{PointerEvent, PointerState, PointerTracker};
pub use init::{InitCommand, MAX_PARAM_BYTES};
pub use touch::{Rejected, TouchEvent, TouchFrame, TouchPoint, PACKET_LEN};
pub use transform::Transform;

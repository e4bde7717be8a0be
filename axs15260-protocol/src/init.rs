//! Command-mode initialization tables

use crate::dcs::{self, ColorMode};

/// Parameter bytes a single init command may carry
pub const MAX_PARAM_BYTES: usize = 64;

/// Register write issued during command-mode initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitCommand<'a> {
    /// Command byte
    pub cmd: u8,
    /// Parameter bytes, at most [`MAX_PARAM_BYTES`]
    pub data: &'a [u8],
    /// Wait after the command, in milliseconds
    pub delay_ms: u16,
}

impl<'a> InitCommand<'a> {
    pub const fn new(cmd: u8, data: &'a [u8], delay_ms: u16) -> Self {
        Self { cmd, data, delay_ms }
    }

    /// Whether the parameters fit in one transaction
    pub const fn is_valid(&self) -> bool {
        self.data.len() <= MAX_PARAM_BYTES
    }
}

/// Vendor register protection key
pub const REG_PROTECT: u8 = 0xBB;

const UNLOCK_KEY: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x5A, 0xA5];
const LOCK_KEY: [u8; 8] = [0x00; 8];

/// Opens the vendor register bank
pub const UNLOCK: InitCommand<'static> = InitCommand::new(REG_PROTECT, &UNLOCK_KEY, 1);
/// Closes the vendor register bank
pub const LOCK: InitCommand<'static> = InitCommand::new(REG_PROTECT, &LOCK_KEY, 50);

// Panel timing, power, GOA and gamma settings from the vendor's
// 2-lane 452x1280 initialization file.

const REG_F8: [u8; 2] = [0x21, 0xA0];
const REG_A0: [u8; 29] = [
    0x00, 0x10, 0x2C, 0x02, 0x00, 0x00, 0x09, 0xFF,
    0x00, 0x05, 0x3A, 0x3A, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0E,
];
const REG_A1: [u8; 22] = [
    0x8F, 0xE5, 0x11, 0xAA, 0x55, 0x00, 0x02, 0x00,
    0x00, 0x00, 0x01, 0x26, 0x26, 0x32, 0x92, 0x93,
    0x13, 0x92, 0x90, 0x90, 0x90, 0x84,
];
const REG_A2: [u8; 38] = [
    0x00, 0x32, 0x0A, 0x0A, 0x5A, 0xFA, 0x5A, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x80, 0x43, 0x88,
    0x88, 0xFF, 0xFF, 0x20, 0x90, 0x00, 0x20, 0x90,
    0x00, 0xE0, 0x01, 0x7F, 0xFF, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xE7, 0xFF, 0xFF, 0x00,
];
const REG_A4: [u8; 16] = [
    0x85, 0x85, 0x92, 0x82, 0xAF, 0xAD, 0xAD, 0x80,
    0x10, 0x30, 0x40, 0x40, 0x20, 0x50, 0x60, 0x53,
];
const REG_B8: [u8; 28] = [
    0x03, 0x08, 0x08, 0x20, 0x00, 0x02, 0x50, 0x5E,
    0x1F, 0x8F, 0x40, 0x00, 0x03, 0x00, 0x83, 0x90,
    0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90,
    0x90, 0x90, 0x90, 0x90,
];
const REG_B9: [u8; 30] = [
    0x64, 0x34, 0x78, 0x32, 0xAA, 0x55, 0xAA, 0x00,
    0x00, 0x00, 0xF0, 0x00, 0x13, 0xC8, 0x00, 0x10,
    0x27, 0xC8, 0x00, 0x64, 0x10, 0xFF, 0x14, 0x07,
    0x1E, 0x0A, 0x00, 0x00, 0x00, 0x00,
];
const REG_BA: [u8; 22] = [
    0x40, 0x80, 0x0E, 0x10, 0x0E, 0x17, 0x90, 0x13,
    0x03, 0xFF, 0x04, 0x22, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x30,
];
const REG_C1: [u8; 30] = [
    0x72, 0x04, 0x02, 0x02, 0x71, 0x05, 0x18, 0x00,
    0x02, 0x00, 0x01, 0x01, 0x43, 0xFF, 0xFF, 0x7F,
    0x4F, 0x52, 0x00, 0x4F, 0x52, 0x00, 0x54, 0x3B,
    0x0B, 0x04, 0x06, 0xFF, 0xFF, 0x00,
];
const REG_C3: [u8; 2] = [0x00, 0xC0];
const REG_C4: [u8; 30] = [
    0x02, 0x02, 0xC0, 0x83, 0x00, 0x63, 0x00, 0x0C,
    0x03, 0x0C, 0x01, 0x01, 0x03, 0x10, 0x3E, 0x06,
    0x9D, 0x05, 0x03, 0x80, 0xFE, 0x10, 0x10, 0x00,
    0x0A, 0x0A, 0x48, 0x48, 0x84, 0xCD,
];
const REG_C5: [u8; 23] = [
    0x19, 0x19, 0x00, 0x48, 0x50, 0x48, 0xA0, 0x55,
    0x30, 0x10, 0x88, 0x19, 0x19, 0x19, 0x19, 0x19,
    0x19, 0x6B, 0x03, 0x10, 0x10, 0x10, 0x00,
];
const REG_C6: [u8; 31] = [
    0x05, 0x0A, 0x05, 0x0A, 0xC0, 0xE0, 0x2E, 0x03,
    0x12, 0x22, 0x12, 0x22, 0x01, 0x00, 0x00, 0x02,
    0xC8, 0x22, 0xFA, 0xE8, 0x30, 0x64, 0x00, 0x08,
    0x00, 0x09, 0xF0, 0x00, 0x00, 0xF0, 0x01,
];
const REG_C7: [u8; 41] = [
    0x50, 0x10, 0x28, 0x00, 0xA2, 0x00, 0x4F, 0x00,
    0x00, 0xFF, 0xA8, 0x99, 0x9C, 0x60, 0x07, 0x04,
    0x0C, 0x0D, 0x0E, 0x0F, 0x01, 0x01, 0x01, 0x01,
    0x30, 0x10, 0x19, 0xFF, 0xFF, 0xFF, 0xFF, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];
const REG_CF: [u8; 31] = [
    0x3C, 0x1E, 0x88, 0x50, 0xFF, 0x18, 0x16, 0x18,
    0x16, 0x0A, 0x8C, 0x3C, 0x6B, 0x0C, 0x6E, 0x88,
    0x0C, 0x0F, 0x22, 0x88, 0xAA, 0x55, 0x04, 0x04,
    0x91, 0xA0, 0x30, 0x24, 0xBB, 0x01, 0x00,
];
const REG_D0: [u8; 44] = [
    0x00, 0x00, 0x01, 0x24, 0x08, 0x05, 0x30, 0x01,
    0xFF, 0x11, 0xC3, 0xC2, 0x22, 0x22, 0x00, 0x03,
    0x10, 0x12, 0x40, 0x10, 0x1E, 0x51, 0x15, 0x00,
    0x20, 0x20, 0x00, 0x03, 0x0D, 0x26, 0xA2, 0x28,
    0x28, 0x28, 0x28, 0x28, 0x28, 0x00, 0x3F, 0xFF,
    0x0D, 0x02, 0x13, 0x12,
];
const REG_D5: [u8; 39] = [
    0x37, 0x3C, 0x93, 0x00, 0x4C, 0x08, 0x6C, 0x74,
    0x00, 0x67, 0x85, 0x0A, 0x08, 0x01, 0x00, 0x4B,
    0x37, 0x3C, 0x37, 0x15, 0x85, 0x01, 0x03, 0x00,
    0x00, 0x55, 0x7B, 0x37, 0x3C, 0x00, 0x37, 0x3C,
    0x04, 0x00, 0x21, 0x5A, 0x1F, 0x30, 0x30,
];
const REG_D6: [u8; 43] = [
    0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE,
    0x6D, 0x00, 0x01, 0x83, 0x86, 0x66, 0xA0, 0x86,
    0x66, 0xA0, 0x17, 0x3C, 0x1B, 0x3C, 0x37, 0x3C,
    0x00, 0x88, 0x08, 0x28, 0x01, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x12, 0x00, 0x00,
    0x00, 0x00, 0x20,
];
const REG_D7: [u8; 17] = [
    0x1B, 0x1C, 0x01, 0x17, 0x15, 0x13, 0x11, 0x0F,
    0x0D, 0x0B, 0x09, 0x19, 0x1A, 0x1F, 0x1F, 0x1F,
    0x1F,
];
const REG_D8: [u8; 17] = [
    0x1B, 0x18, 0x00, 0x16, 0x14, 0x12, 0x10, 0x0E,
    0x0C, 0x0A, 0x08, 0x19, 0x1A, 0x1F, 0x1F, 0x1F,
    0x1F,
];
const REG_DF: [u8; 7] = [0x00, 0x00, 0x5B, 0xAB, 0xBB, 0x2B, 0x28];

// Gamma, positive then negative
const REG_E0: [u8; 32] = [
    0x00, 0x01, 0x03, 0x07, 0x09, 0x0A, 0x0D, 0x0C,
    0x17, 0x2A, 0x3B, 0x3D, 0x4B, 0x61, 0x6C, 0x78,
    0x90, 0xA0, 0xA1, 0xB7, 0xC0, 0x60, 0x5F, 0x63,
    0x68, 0x6C, 0x6E, 0x75, 0x7F, 0x33, 0x35, 0x03,
];
const REG_E1: [u8; 33] = [
    0x00, 0x01, 0x03, 0x07, 0x09, 0x0A, 0x0D, 0x0C,
    0x17, 0x2A, 0x3B, 0x3D, 0x4B, 0x61, 0x6C, 0x78,
    0x90, 0xA0, 0xA1, 0xB7, 0xC0, 0x60, 0x5F, 0x63,
    0x68, 0x6C, 0x6E, 0x75, 0x7F, 0x33, 0x35, 0xD8,
    0x33,
];
const REG_E7: [u8; 14] = [
    0x00, 0x05, 0xC4, 0x01, 0x00, 0x05, 0xC4, 0x01,
    0x00, 0x10, 0x00, 0x08, 0xE0, 0x07,
];
const REG_E8: [u8; 22] = [
    0xE9, 0x05, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01,
    0x02, 0x30, 0x0D, 0x00, 0xCF, 0x20, 0x00, 0xFF,
    0x40, 0x00, 0x00, 0x00, 0x00, 0x00,
];
const REG_E9: [u8; 22] = [
    0x00, 0x2B, 0x02, 0x00, 0x02, 0x03, 0x00, 0xB2,
    0x10, 0x0E, 0x60, 0x14, 0x05, 0x81, 0x01, 0x06,
    0x05, 0x00, 0x80, 0x07, 0x08, 0x07,
];

/// Vendor register table, written between [`UNLOCK`] and [`LOCK`]
pub static VENDOR_REGISTERS: [InitCommand<'static>; 26] = [
    InitCommand::new(0xF8, &REG_F8, 1),
    InitCommand::new(0xA0, &REG_A0, 1),
    InitCommand::new(0xA1, &REG_A1, 1),
    InitCommand::new(0xA2, &REG_A2, 1),
    InitCommand::new(0xA4, &REG_A4, 1),
    InitCommand::new(0xB8, &REG_B8, 1),
    InitCommand::new(0xB9, &REG_B9, 1),
    InitCommand::new(0xBA, &REG_BA, 1),
    InitCommand::new(0xC1, &REG_C1, 1),
    InitCommand::new(0xC3, &REG_C3, 1),
    InitCommand::new(0xC4, &REG_C4, 1),
    InitCommand::new(0xC5, &REG_C5, 1),
    InitCommand::new(0xC6, &REG_C6, 1),
    InitCommand::new(0xC7, &REG_C7, 1),
    InitCommand::new(0xCF, &REG_CF, 1),
    InitCommand::new(0xD0, &REG_D0, 1),
    InitCommand::new(0xD5, &REG_D5, 1),
    InitCommand::new(0xD6, &REG_D6, 1),
    InitCommand::new(0xD7, &REG_D7, 1),
    InitCommand::new(0xD8, &REG_D8, 1),
    InitCommand::new(0xDF, &REG_DF, 1),
    InitCommand::new(0xE0, &REG_E0, 1),
    InitCommand::new(0xE1, &REG_E1, 1),
    InitCommand::new(0xE7, &REG_E7, 1),
    InitCommand::new(0xE8, &REG_E8, 1),
    InitCommand::new(0xE9, &REG_E9, 1),
];

/// Number of commands in the default sequence
pub const DEFAULT_SEQUENCE_LEN: usize = VENDOR_REGISTERS.len() + 5;

/// Built-in initialization sequence
///
/// Unlock, vendor registers, lock, then COLMOD with `color_mode`,
/// sleep-out and display-on with their settle times.
pub fn default_sequence(
    color_mode: ColorMode,
) -> impl Iterator<Item = InitCommand<'static>> + Clone {
    let tail = [
        LOCK,
        InitCommand::new(dcs::COLMOD, color_mode.params(), 10),
        InitCommand::new(dcs::SLPOUT, &[], 120),
        InitCommand::new(dcs::DISPON, &[], 50),
    ];
    core::iter::once(UNLOCK)
        .chain(VENDOR_REGISTERS.iter().copied())
        .chain(tail)
}

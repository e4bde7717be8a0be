//! MIPI DCS commands used by the panel driver

/// Software reset
pub const SWRESET: u8 = 0x01;
/// Enter sleep
pub const SLPIN: u8 = 0x10;
/// Exit sleep
pub const SLPOUT: u8 = 0x11;
/// Display inversion off
pub const INVOFF: u8 = 0x20;
/// Display inversion on
pub const INVON: u8 = 0x21;
/// Display off
pub const DISPOFF: u8 = 0x28;
/// Display on
pub const DISPON: u8 = 0x29;
/// Memory data access control
pub const MADCTL: u8 = 0x36;
/// Interface pixel format
pub const COLMOD: u8 = 0x3A;

/// Recovery time after a hardware or software reset (datasheet minimum 160 ms)
pub const RESET_RECOVERY_MS: u32 = 170;
/// Settle time after sleep-in
pub const SLEEP_IN_SETTLE_MS: u32 = 5;
/// Settle time after sleep-out
pub const SLEEP_OUT_SETTLE_MS: u32 = 120;

/// COLMOD parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ColorMode {
    Rgb565 = 0x55,
    Rgb666 = 0x66,
    Rgb888 = 0x77,
}

impl ColorMode {
    /// Pick the interface format for a pixel depth; unknown depths use RGB888
    pub const fn from_bits_per_pixel(bits_per_pixel: u8) -> Self {
        match bits_per_pixel {
            16 => ColorMode::Rgb565,
            18 => ColorMode::Rgb666,
            _ => ColorMode::Rgb888,
        }
    }

    /// Byte sent with COLMOD
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// COLMOD parameter block
    pub const fn params(self) -> &'static [u8] {
        match self {
            ColorMode::Rgb565 => &[0x55],
            ColorMode::Rgb666 => &[0x66],
            ColorMode::Rgb888 => &[0x77],
        }
    }

    /// Bytes per pixel in a host frame buffer
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorMode::Rgb565 => 2,
            ColorMode::Rgb666 | ColorMode::Rgb888 => 3,
        }
    }
}

/// MADCTL register value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Madctl(u8);

impl Madctl {
    /// Row address order (mirror Y)
    pub const MY: u8 = 0x80;
    /// Column address order (mirror X)
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    /// BGR element order
    pub const BGR: u8 = 0x08;

    pub const fn new(bgr: bool) -> Self {
        if bgr {
            Self(Self::BGR)
        } else {
            Self(0)
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_bgr(self) -> bool {
        self.0 & Self::BGR != 0
    }

    /// Replace the mirror bits, keeping everything else
    pub const fn with_mirror(self, mirror_x: bool, mirror_y: bool) -> Self {
        let mut bits = self.0 & !(Self::MX | Self::MY);
        if mirror_x {
            bits |= Self::MX;
        }
        if mirror_y {
            bits |= Self::MY;
        }
        Self(bits)
    }

    /// Replace the exchange bit, keeping everything else
    pub const fn with_swap(self, swap_xy: bool) -> Self {
        if swap_xy {
            Self(self.0 | Self::MV)
        } else {
            Self(self.0 & !Self::MV)
        }
    }
}

/// Parameterless DCS control command
///
/// These are the only commands the panel accepts once the link streams
/// video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlCommand {
    SoftReset,
    SleepIn,
    SleepOut,
    InvertOff,
    InvertOn,
    DisplayOff,
    DisplayOn,
}

impl ControlCommand {
    /// DCS opcode
    pub const fn code(self) -> u8 {
        match self {
            ControlCommand::SoftReset => SWRESET,
            ControlCommand::SleepIn => SLPIN,
            ControlCommand::SleepOut => SLPOUT,
            ControlCommand::InvertOff => INVOFF,
            ControlCommand::InvertOn => INVON,
            ControlCommand::DisplayOff => DISPOFF,
            ControlCommand::DisplayOn => DISPON,
        }
    }

    /// Blocking wait the controller needs after the command
    pub const fn settle_ms(self) -> u32 {
        match self {
            ControlCommand::SoftReset => RESET_RECOVERY_MS,
            ControlCommand::SleepIn => SLEEP_IN_SETTLE_MS,
            ControlCommand::SleepOut => SLEEP_OUT_SETTLE_MS,
            _ => 0,
        }
    }

    pub const fn invert(enable: bool) -> Self {
        if enable {
            ControlCommand::InvertOn
        } else {
            ControlCommand::InvertOff
        }
    }

    pub const fn display(on: bool) -> Self {
        if on {
            ControlCommand::DisplayOn
        } else {
            ControlCommand::DisplayOff
        }
    }

    pub const fn sleep(enter: bool) -> Self {
        if enter {
            ControlCommand::SleepIn
        } else {
            ControlCommand::SleepOut
        }
    }
}

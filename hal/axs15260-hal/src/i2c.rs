//! I2C bus configuration
//!
//! Transfers go through `embedded_hal::i2c::I2c`; this module only carries
//! the settings the platform needs when it opens the bus for a device.

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct I2cConfig {
    /// 7-bit device address
    pub address: u8,
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz), no address
    pub const STANDARD: Self = Self {
        address: 0,
        frequency: 100_000,
    };

    /// Fast mode (400 kHz), no address
    pub const FAST: Self = Self {
        address: 0,
        frequency: 400_000,
    };

    /// Fast mode plus (1 MHz), no address
    pub const FAST_PLUS: Self = Self {
        address: 0,
        frequency: 1_000_000,
    };

    /// Same settings for the device at `address`
    pub const fn with_address(self, address: u8) -> Self {
        Self { address, ..self }
    }

    /// Same settings at a different clock; zero keeps the current clock
    pub const fn with_frequency(self, frequency: u32) -> Self {
        if frequency == 0 {
            self
        } else {
            Self { frequency, ..self }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let cfg = I2cConfig::STANDARD.with_address(0x3B).with_frequency(0);
        assert_eq!(cfg.address, 0x3B);
        assert_eq!(cfg.frequency, 100_000);
        assert_eq!(I2cConfig::FAST.with_frequency(250_000).frequency, 250_000);
    }
}

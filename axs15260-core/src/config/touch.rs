//! Touch configuration

use axs15260_hal::I2cConfig;
use axs15260_protocol::touch::{COORD_LIMIT, DEFAULT_X_MAX, DEFAULT_Y_MAX, I2C_ADDR, I2C_FREQ_HZ};
use axs15260_protocol::Transform;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::TouchError;

/// Touch controller configuration
///
/// Zero values select the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TouchConfig {
    /// Bus clock in Hz (default 100 kHz)
    pub i2c_freq_hz: u32,
    /// Screen width in touch coordinates (default 452)
    pub x_max: u16,
    /// Screen height in touch coordinates (default 1280)
    pub y_max: u16,
    pub swap_xy: bool,
    pub mirror_x: bool,
    pub mirror_y: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            i2c_freq_hz: I2C_FREQ_HZ,
            x_max: DEFAULT_X_MAX,
            y_max: DEFAULT_Y_MAX,
            swap_xy: false,
            mirror_x: false,
            mirror_y: false,
        }
    }
}

impl TouchConfig {
    /// Effective bounds, with defaults substituted for zero
    pub fn bounds(&self) -> Result<(u16, u16), TouchError> {
        let x_max = if self.x_max == 0 { DEFAULT_X_MAX } else { self.x_max };
        let y_max = if self.y_max == 0 { DEFAULT_Y_MAX } else { self.y_max };
        if x_max > COORD_LIMIT || y_max > COORD_LIMIT {
            return Err(TouchError::InvalidArgument);
        }
        Ok((x_max, y_max))
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.swap_xy, self.mirror_x, self.mirror_y)
    }

    /// Settings the platform should open the I2C device with
    pub fn bus_config(&self) -> I2cConfig {
        I2cConfig::STANDARD
            .with_address(I2C_ADDR)
            .with_frequency(self.i2c_freq_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bounds_use_defaults() {
        let cfg = TouchConfig {
            x_max: 0,
            y_max: 0,
            ..Default::default()
        };
        assert_eq!(cfg.bounds(), Ok((452, 1280)));
    }

    #[test]
    fn test_bounds_above_12_bits_rejected() {
        let cfg = TouchConfig {
            x_max: 4097,
            ..Default::default()
        };
        assert_eq!(cfg.bounds(), Err(TouchError::InvalidArgument));

        let cfg = TouchConfig {
            x_max: 4096,
            y_max: 4096,
            ..Default::default()
        };
        assert_eq!(cfg.bounds(), Ok((4096, 4096)));
    }

    #[test]
    fn test_bus_config() {
        let bus = TouchConfig::default().bus_config();
        assert_eq!(bus.address, 0x3B);
        assert_eq!(bus.frequency, 100_000);

        let cfg = TouchConfig {
            i2c_freq_hz: 0,
            ..Default::default()
        };
        assert_eq!(cfg.bus_config().frequency, 100_000);

        let cfg = TouchConfig {
            i2c_freq_hz: 400_000,
            ..Default::default()
        };
        assert_eq!(cfg.bus_config().frequency, 400_000);
    }

    #[test]
    fn test_transform_from_flags() {
        let cfg = TouchConfig {
            swap_xy: true,
            mirror_y: true,
            ..Default::default()
        };
        assert_eq!(cfg.transform(), Transform::new(true, false, true));
    }
}

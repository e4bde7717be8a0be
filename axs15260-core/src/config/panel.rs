//! Panel configuration

use axs15260_hal::{DpiConfig, DsiBus};
use axs15260_protocol::{ColorMode, InitCommand, Madctl};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order of the color elements in a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RgbOrder {
    #[default]
    Rgb,
    Bgr,
}

/// Generic panel device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelDevConfig {
    /// 16, 18 or 24; anything else is driven as 24
    pub bits_per_pixel: u8,
    pub rgb_order: RgbOrder,
    /// Reset pin polarity (normally active low)
    pub reset_active_high: bool,
}

impl Default for PanelDevConfig {
    fn default() -> Self {
        Self {
            bits_per_pixel: 24,
            rgb_order: RgbOrder::Rgb,
            reset_active_high: false,
        }
    }
}

impl PanelDevConfig {
    pub const fn color_mode(&self) -> ColorMode {
        ColorMode::from_bits_per_pixel(self.bits_per_pixel)
    }

    /// MADCTL value at power-on
    pub const fn madctl(&self) -> Madctl {
        Madctl::new(matches!(self.rgb_order, RgbOrder::Bgr))
    }
}

/// MIPI-DSI link of the panel
pub struct MipiConfig<'a, B> {
    /// DSI host the video panel is created on
    pub dsi_bus: B,
    pub dpi_config: &'a DpiConfig,
}

impl<'a, B: DsiBus> MipiConfig<'a, B> {
    pub fn new(dsi_bus: B, dpi_config: &'a DpiConfig) -> Self {
        Self {
            dsi_bus,
            dpi_config,
        }
    }
}

/// AXS15260 specific configuration
///
/// `B` is the DSI bus type; use [`core::convert::Infallible`] for a panel
/// driven over command mode only.
pub struct Axs15260VendorConfig<'a, B> {
    /// Video path; `None` keeps the panel in command mode
    pub mipi: Option<MipiConfig<'a, B>>,
    /// Replaces the built-in init sequence when non-empty
    pub init_cmds: &'a [InitCommand<'a>],
    /// Implement mirror/swap through MADCTL while in command mode
    pub mirror_by_cmd: bool,
}

impl<'a, B: DsiBus> Axs15260VendorConfig<'a, B> {
    /// Video panel with the built-in init sequence
    pub fn mipi(dsi_bus: B, dpi_config: &'a DpiConfig) -> Self {
        Self {
            mipi: Some(MipiConfig::new(dsi_bus, dpi_config)),
            init_cmds: &[],
            mirror_by_cmd: false,
        }
    }

    pub fn with_init_cmds(self, init_cmds: &'a [InitCommand<'a>]) -> Self {
        Self { init_cmds, ..self }
    }

    pub fn with_mirror_by_cmd(self, mirror_by_cmd: bool) -> Self {
        Self {
            mirror_by_cmd,
            ..self
        }
    }
}

impl<'a> Axs15260VendorConfig<'a, core::convert::Infallible> {
    /// Command-mode only panel
    pub const fn command_mode() -> Self {
        Self {
            mipi: None,
            init_cmds: &[],
            mirror_by_cmd: false,
        }
    }
}

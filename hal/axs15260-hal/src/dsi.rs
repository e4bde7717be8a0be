//! MIPI-DSI bus and DPI video panel
//!
//! After command-mode initialization the host switches the link to video
//! mode and continuously streams a frame buffer to the controller. The
//! platform owns the DSI host; the drivers only create the DPI panel on top
//! of it and hand pixel data to that panel.

use core::convert::Infallible;

use crate::error::Error;

/// Horizontal resolution of the AXS15260 bar panel
pub const AXS15260_H_RES: u16 = 452;
/// Vertical resolution of the AXS15260 bar panel
pub const AXS15260_V_RES: u16 = 1280;

/// Pixel format streamed over DPI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    /// 16 bits per pixel
    Rgb565,
    /// 18 bits per pixel, three bytes per pixel in memory
    Rgb666,
    /// 24 bits per pixel
    Rgb888,
}

impl PixelFormat {
    /// Bits per pixel on the wire
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Rgb565 => 16,
            PixelFormat::Rgb666 => 18,
            PixelFormat::Rgb888 => 24,
        }
    }

    /// Bytes each pixel occupies in a frame buffer
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb666 | PixelFormat::Rgb888 => 3,
        }
    }
}

/// Video timing in pixels / lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VideoTiming {
    pub h_size: u16,
    pub v_size: u16,
    pub hsync_back_porch: u16,
    pub hsync_pulse_width: u16,
    pub hsync_front_porch: u16,
    pub vsync_back_porch: u16,
    pub vsync_pulse_width: u16,
    pub vsync_front_porch: u16,
}

impl VideoTiming {
    /// 452x1280 timing from the vendor initialization file
    pub const AXS15260: Self = Self {
        h_size: AXS15260_H_RES,
        v_size: AXS15260_V_RES,
        hsync_back_porch: 90,
        hsync_pulse_width: 10,
        hsync_front_porch: 90,
        vsync_back_porch: 10,
        vsync_pulse_width: 50,
        vsync_front_porch: 250,
    };

    /// Total pixel clocks per line, including blanking
    pub const fn h_total(&self) -> u32 {
        self.h_size as u32
            + self.hsync_back_porch as u32
            + self.hsync_pulse_width as u32
            + self.hsync_front_porch as u32
    }

    /// Total lines per frame, including blanking
    pub const fn v_total(&self) -> u32 {
        self.v_size as u32
            + self.vsync_back_porch as u32
            + self.vsync_pulse_width as u32
            + self.vsync_front_porch as u32
    }
}

/// DPI video panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DpiConfig {
    /// DSI virtual channel
    pub virtual_channel: u8,
    /// Pixel clock in MHz
    pub dpi_clock_freq_mhz: u32,
    pub pixel_format: PixelFormat,
    /// Number of frame buffers the platform allocates
    pub num_fbs: u8,
    /// Use the 2D-DMA engine to copy draws into the frame buffer
    pub use_dma2d: bool,
    pub timing: VideoTiming,
}

impl DpiConfig {
    /// 452x1280 preset with the given pixel format
    pub const fn axs15260(pixel_format: PixelFormat) -> Self {
        Self {
            virtual_channel: 0,
            dpi_clock_freq_mhz: 48,
            pixel_format,
            num_fbs: 1,
            use_dma2d: true,
            timing: VideoTiming::AXS15260,
        }
    }

    /// Check that the configuration describes a usable video stream
    pub fn is_valid(&self) -> bool {
        self.dpi_clock_freq_mhz != 0
            && self.num_fbs != 0
            && self.timing.h_size != 0
            && self.timing.v_size != 0
    }
}

/// DSI host bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DsiBusConfig {
    pub bus_id: u8,
    pub num_data_lanes: u8,
    /// High-speed lane bit rate in Mbps
    pub lane_bit_rate_mbps: u32,
}

impl DsiBusConfig {
    /// Two data lanes at 1000 Mbps
    pub const AXS15260: Self = Self {
        bus_id: 0,
        num_data_lanes: 2,
        lane_bit_rate_mbps: 1000,
    };
}

impl Default for DsiBusConfig {
    fn default() -> Self {
        Self::AXS15260
    }
}

/// Video-mode panel streaming a frame buffer over DPI
///
/// Coordinates are half-open: `x_end` and `y_end` are exclusive.
pub trait VideoPanel {
    /// Error type for video panel operations
    type Error: Error;

    /// Start streaming
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Copy a rectangle of pixels into the frame buffer
    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Offset applied to every subsequent draw
    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), Self::Error>;

    /// Stop streaming and free the frame buffers
    fn delete(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}

/// MIPI-DSI host able to create a DPI video panel
pub trait DsiBus {
    /// Error type for bus operations
    type Error: Error;
    /// Video panel created by this bus
    type Panel: VideoPanel;

    /// Create the DPI panel, allocating its frame buffers
    ///
    /// Once this returns the link is in video mode.
    fn new_dpi_panel(&mut self, config: &DpiConfig) -> Result<Self::Panel, Self::Error>;
}

impl<T: DsiBus + ?Sized> DsiBus for &mut T {
    type Error = T::Error;
    type Panel = T::Panel;

    fn new_dpi_panel(&mut self, config: &DpiConfig) -> Result<Self::Panel, Self::Error> {
        T::new_dpi_panel(self, config)
    }
}

// A panel without a MIPI-DSI path uses `Infallible` as its (uninhabited)
// bus and video panel types.

impl VideoPanel for Infallible {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn draw_bitmap(&mut self, _: u16, _: u16, _: u16, _: u16, _: &[u8]) -> Result<(), Self::Error> {
        match *self {}
    }

    fn set_gap(&mut self, _: u16, _: u16) -> Result<(), Self::Error> {
        match *self {}
    }

    fn delete(self) -> Result<(), Self::Error> {
        match self {}
    }
}

impl DsiBus for Infallible {
    type Error = Infallible;
    type Panel = Infallible;

    fn new_dpi_panel(&mut self, _: &DpiConfig) -> Result<Self::Panel, Self::Error> {
        match *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_matches_vendor_timing() {
        let cfg = DpiConfig::axs15260(PixelFormat::Rgb888);
        assert_eq!(cfg.timing.h_size, 452);
        assert_eq!(cfg.timing.v_size, 1280);
        assert_eq!(cfg.dpi_clock_freq_mhz, 48);
        assert_eq!(cfg.num_fbs, 1);
        assert!(cfg.use_dma2d);
        assert!(cfg.is_valid());
    }

    #[test]
    fn test_preset_totals_include_blanking() {
        let t = VideoTiming::AXS15260;
        assert_eq!(t.h_total(), 452 + 90 + 10 + 90);
        assert_eq!(t.v_total(), 1280 + 10 + 50 + 250);
    }

    #[test]
    fn test_zero_sized_config_invalid() {
        let mut cfg = DpiConfig::axs15260(PixelFormat::Rgb565);
        cfg.timing.h_size = 0;
        assert!(!cfg.is_valid());

        let mut cfg = DpiConfig::axs15260(PixelFormat::Rgb565);
        cfg.dpi_clock_freq_mhz = 0;
        assert!(!cfg.is_valid());
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Rgb666.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::Rgb888.bytes_per_pixel(), 3);
    }
}

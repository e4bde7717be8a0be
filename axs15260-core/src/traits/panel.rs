//! Display panel operation set

use crate::error::PanelError;

/// Rectangle in panel pixels, end coordinates exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Area {
    pub x_start: u16,
    pub y_start: u16,
    pub x_end: u16,
    pub y_end: u16,
}

impl Area {
    pub const fn new(x_start: u16, y_start: u16, x_end: u16, y_end: u16) -> Self {
        Self {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Whole screen of `width` x `height`
    pub const fn full(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Non-empty with start before end on both axes
    pub const fn is_valid(&self) -> bool {
        self.x_start < self.x_end && self.y_start < self.y_end
    }

    pub const fn width(&self) -> u16 {
        self.x_end.saturating_sub(self.x_start)
    }

    pub const fn height(&self) -> u16 {
        self.y_end.saturating_sub(self.y_start)
    }

    pub const fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// Operation set of a display panel
///
/// Object safe, so a display layer can drive any panel family through
/// `&mut dyn DisplayPanel`.
pub trait DisplayPanel {
    /// Hardware reset if a reset line is wired, software reset otherwise
    fn reset(&mut self) -> Result<(), PanelError>;

    /// Start the panel
    fn init(&mut self) -> Result<(), PanelError>;

    /// Write pixels into `area`
    fn draw_bitmap(&mut self, area: Area, data: &[u8]) -> Result<(), PanelError>;

    fn invert_color(&mut self, invert: bool) -> Result<(), PanelError>;

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), PanelError>;

    fn swap_xy(&mut self, swap: bool) -> Result<(), PanelError>;

    /// Offset applied to subsequent draws
    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), PanelError>;

    fn display_on_off(&mut self, on: bool) -> Result<(), PanelError>;

    /// Enter (`true`) or leave sleep
    fn sleep(&mut self, enter: bool) -> Result<(), PanelError>;
}

/// Helpers built from the panel operations
pub trait DisplayPanelExt: DisplayPanel {
    /// Wake and light the panel, or blank it and put it to sleep
    fn power(&mut self, on: bool) -> Result<(), PanelError> {
        if on {
            self.sleep(false)?;
            self.display_on_off(true)
        } else {
            self.display_on_off(false)?;
            self.sleep(true)
        }
    }

    /// Draw a full `width` x `height` frame
    fn draw_frame(&mut self, width: u16, height: u16, data: &[u8]) -> Result<(), PanelError> {
        self.draw_bitmap(Area::full(width, height), data)
    }
}

// Blanket implementation for all DisplayPanel types
impl<T: DisplayPanel + ?Sized> DisplayPanelExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPanel {
        calls: [Option<&'static str>; 4],
        len: usize,
        last_area: Option<Area>,
    }

    impl MockPanel {
        fn record(&mut self, call: &'static str) {
            self.calls[self.len] = Some(call);
            self.len += 1;
        }
    }

    impl DisplayPanel for MockPanel {
        fn reset(&mut self) -> Result<(), PanelError> {
            Ok(())
        }
        fn init(&mut self) -> Result<(), PanelError> {
            Ok(())
        }
        fn draw_bitmap(&mut self, area: Area, _data: &[u8]) -> Result<(), PanelError> {
            self.last_area = Some(area);
            Ok(())
        }
        fn invert_color(&mut self, _invert: bool) -> Result<(), PanelError> {
            Ok(())
        }
        fn mirror(&mut self, _x: bool, _y: bool) -> Result<(), PanelError> {
            Ok(())
        }
        fn swap_xy(&mut self, _swap: bool) -> Result<(), PanelError> {
            Ok(())
        }
        fn set_gap(&mut self, _x: u16, _y: u16) -> Result<(), PanelError> {
            Err(PanelError::NotSupported)
        }
        fn display_on_off(&mut self, on: bool) -> Result<(), PanelError> {
            self.record(if on { "display_on" } else { "display_off" });
            Ok(())
        }
        fn sleep(&mut self, enter: bool) -> Result<(), PanelError> {
            self.record(if enter { "sleep_in" } else { "sleep_out" });
            Ok(())
        }
    }

    #[test]
    fn test_power_on_wakes_first() {
        let mut panel = MockPanel::default();
        panel.power(true).unwrap();
        assert_eq!(panel.calls[..2], [Some("sleep_out"), Some("display_on")]);
    }

    #[test]
    fn test_power_off_blanks_first() {
        let mut panel = MockPanel::default();
        panel.power(false).unwrap();
        assert_eq!(panel.calls[..2], [Some("display_off"), Some("sleep_in")]);
    }

    #[test]
    fn test_draw_frame_through_dyn() {
        let mut panel = MockPanel::default();
        let dyn_panel: &mut dyn DisplayPanel = &mut panel;
        dyn_panel.draw_frame(452, 1280, &[]).unwrap();
        assert_eq!(panel.last_area, Some(Area::new(0, 0, 452, 1280)));
    }

    #[test]
    fn test_area_geometry() {
        let area = Area::new(10, 20, 30, 60);
        assert!(area.is_valid());
        assert_eq!(area.width(), 20);
        assert_eq!(area.height(), 40);
        assert_eq!(area.pixel_count(), 800);

        assert!(!Area::new(5, 0, 5, 10).is_valid());
        assert!(!Area::new(6, 0, 5, 10).is_valid());
        assert_eq!(Area::new(6, 0, 5, 10).width(), 0);
    }
}

//! GPIO pin abstractions
//!
//! Reset lines are plain `embedded-hal` output pins. The touch controller's
//! INT line additionally needs edge interrupts, which `embedded-hal` does
//! not model, so [`InterruptPin`] adds that on top of [`InputPin`].

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Edge that triggers an interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
    Any,
}

/// Input pin with edge interrupt support
///
/// The platform routes the interrupt to whatever handler the application
/// installed; the driver only arms and disarms it.
pub trait InterruptPin: InputPin {
    /// Arm the interrupt on the given edge
    fn enable_interrupt(&mut self, edge: Edge) -> Result<(), Self::Error>;

    /// Disarm the interrupt
    fn disable_interrupt(&mut self) -> Result<(), Self::Error>;
}

/// Placeholder type for an unconnected pin
///
/// Drivers take optional pins as `Option<P>`; pass `None::<NoPin>` when the
/// line is not wired. Writes are ignored and reads report a released
/// (high) line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl InputPin for NoPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

impl InterruptPin for NoPin {
    fn enable_interrupt(&mut self, _edge: Edge) -> Result<(), Self::Error> {
        Ok(())
    }

    fn disable_interrupt(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pin_reads_released() {
        let mut pin = NoPin;
        assert_eq!(pin.is_low(), Ok(false));
        assert_eq!(pin.is_high(), Ok(true));
        assert_eq!(pin.set_low(), Ok(()));
        assert_eq!(pin.enable_interrupt(Edge::Falling), Ok(()));
    }
}

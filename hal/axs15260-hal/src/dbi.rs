//! Command-mode (DBI) transport
//!
//! In command mode the display controller is addressed as a register file:
//! every transaction is one 8-bit command followed by zero or more
//! parameter bytes. On a MIPI-DSI link these are DCS writes sent in
//! low-power mode before the host switches to video streaming.

use crate::error::Error;

/// Command/parameter channel to the display controller
///
/// Implemented by the platform on top of its DBI/DCS panel IO.
pub trait CommandTransport {
    /// Error type for transport operations
    type Error: Error;

    /// Send a command with its parameter bytes (0 to 64)
    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error>;
}

impl<T: CommandTransport + ?Sized> CommandTransport for &mut T {
    type Error = T::Error;

    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
        T::tx_param(self, command, params)
    }
}

/// DBI panel IO configuration
///
/// Handed to the platform when it creates the command channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DbiIoConfig {
    /// DSI virtual channel
    pub virtual_channel: u8,
    /// Bit width of a command
    pub lcd_cmd_bits: u8,
    /// Bit width of a parameter
    pub lcd_param_bits: u8,
}

impl Default for DbiIoConfig {
    fn default() -> Self {
        Self {
            virtual_channel: 0,
            lcd_cmd_bits: 8,
            lcd_param_bits: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    struct Recorder {
        last: Option<(u8, usize)>,
    }

    impl CommandTransport for Recorder {
        type Error = ErrorKind;

        fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
            self.last = Some((command, params.len()));
            Ok(())
        }
    }

    fn send_through<T: CommandTransport>(mut io: T) -> Result<(), T::Error> {
        io.tx_param(0x3A, &[0x77])
    }

    #[test]
    fn test_default_io_config_is_8_bit() {
        let cfg = DbiIoConfig::default();
        assert_eq!(cfg.virtual_channel, 0);
        assert_eq!((cfg.lcd_cmd_bits, cfg.lcd_param_bits), (8, 8));
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut io = Recorder { last: None };
        send_through(&mut io).unwrap();
        assert_eq!(io.last, Some((0x3A, 1)));
    }
}

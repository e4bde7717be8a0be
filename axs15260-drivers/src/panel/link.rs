//! Command-mode and video-mode views of the panel link
//!
//! The DSI link starts in command mode, where the whole register file is
//! reachable. Creating the DPI video panel switches the link to video mode
//! for good; from then on the controller only takes the parameterless DCS
//! control commands. The types encode that: [`CommandMode::into_video`]
//! consumes the register channel and the resulting [`VideoLink`] only hands
//! out a [`ControlChannel`].

use axs15260_core::PanelError;
use axs15260_hal::{CommandTransport, DpiConfig, DsiBus, VideoPanel};
use axs15260_protocol::{dcs, ControlCommand, InitCommand, Madctl};
use embedded_hal::delay::DelayNs;

fn send_control<T: CommandTransport, D: DelayNs>(
    io: &mut T,
    command: ControlCommand,
    delay: &mut D,
) -> Result<(), PanelError> {
    io.tx_param(command.code(), &[])
        .map_err(PanelError::transport)?;
    let settle = command.settle_ms();
    if settle > 0 {
        delay.delay_ms(settle);
    }
    Ok(())
}

/// Link in command mode, with full register access
pub struct CommandMode<T> {
    io: T,
}

impl<T: CommandTransport> CommandMode<T> {
    pub fn new(io: T) -> Self {
        Self { io }
    }

    /// Write a register
    pub fn write(&mut self, command: u8, params: &[u8]) -> Result<(), PanelError> {
        if !InitCommand::new(command, params, 0).is_valid() {
            return Err(PanelError::InvalidArgument);
        }
        self.io
            .tx_param(command, params)
            .map_err(PanelError::transport)
    }

    /// Send a control command and wait for it to settle
    pub fn control<D: DelayNs>(
        &mut self,
        command: ControlCommand,
        delay: &mut D,
    ) -> Result<(), PanelError> {
        send_control(&mut self.io, command, delay)
    }

    pub fn set_madctl(&mut self, madctl: Madctl) -> Result<(), PanelError> {
        self.write(dcs::MADCTL, &[madctl.bits()])
    }

    /// Send an init sequence, waiting after each command as it asks
    ///
    /// The whole sequence is checked before the first byte goes out, so a
    /// malformed table is never half applied. Returns the number of
    /// commands sent.
    pub fn run_sequence<'a, I, D>(&mut self, commands: I, delay: &mut D) -> Result<usize, PanelError>
    where
        I: IntoIterator<Item = InitCommand<'a>>,
        I::IntoIter: Clone,
        D: DelayNs,
    {
        let commands = commands.into_iter();
        if !commands.clone().all(|cmd| cmd.is_valid()) {
            return Err(PanelError::InvalidArgument);
        }

        let mut sent = 0;
        for cmd in commands {
            self.io
                .tx_param(cmd.cmd, cmd.data)
                .map_err(PanelError::transport)?;
            if cmd.delay_ms > 0 {
                delay.delay_ms(u32::from(cmd.delay_ms));
            }
            sent += 1;
        }
        Ok(sent)
    }

    /// Create the DPI video panel, switching the link to video mode
    pub fn into_video<B: DsiBus>(
        self,
        bus: &mut B,
        config: &DpiConfig,
    ) -> Result<VideoLink<T, B::Panel>, PanelError> {
        if !config.is_valid() {
            return Err(PanelError::InvalidArgument);
        }
        let panel = bus.new_dpi_panel(config).map_err(PanelError::video)?;
        Ok(VideoLink {
            control: ControlChannel { io: self.io },
            panel,
        })
    }

    /// Give the transport back
    pub fn into_inner(self) -> T {
        self.io
    }
}

/// Control commands that remain valid while video streams
pub struct ControlChannel<T> {
    io: T,
}

impl<T: CommandTransport> ControlChannel<T> {
    /// Send a control command and wait for it to settle
    pub fn send<D: DelayNs>(
        &mut self,
        command: ControlCommand,
        delay: &mut D,
    ) -> Result<(), PanelError> {
        send_control(&mut self.io, command, delay)
    }

    pub fn into_inner(self) -> T {
        self.io
    }
}

/// Link in video mode
pub struct VideoLink<T, V> {
    control: ControlChannel<T>,
    panel: V,
}

impl<T: CommandTransport, V: VideoPanel> VideoLink<T, V> {
    pub fn control(&mut self) -> &mut ControlChannel<T> {
        &mut self.control
    }

    pub fn panel(&mut self) -> &mut V {
        &mut self.panel
    }

    /// Delete the video panel and give the transport back
    ///
    /// The transport is returned even if the platform fails to delete the
    /// panel.
    pub fn close(self) -> (T, Result<(), PanelError>) {
        let result = self.panel.delete().map_err(PanelError::video);
        (self.control.into_inner(), result)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::panel::mock::*;
    use axs15260_hal::{ErrorKind, PixelFormat};
    use std::vec;

    const DPI: DpiConfig = DpiConfig::axs15260(PixelFormat::Rgb565);

    #[test]
    fn test_write_rejects_oversized_params() {
        let log = new_log();
        let mut link = CommandMode::new(MockIo::new(&log));
        let params = [0u8; 65];

        assert_eq!(link.write(0xA0, &params), Err(PanelError::InvalidArgument));
        assert!(link.write(0xA0, &params[..64]).is_ok());
        assert_eq!(commands(&log), vec![0xA0]);
    }

    #[test]
    fn test_run_sequence_checks_whole_table_first() {
        let log = new_log();
        let mut link = CommandMode::new(MockIo::new(&log));
        let mut delay = MockDelay { log: log.clone() };
        let big = [0u8; 80];
        let table = [InitCommand::new(0x11, &[], 120), InitCommand::new(0xA0, &big, 0)];

        assert_eq!(
            link.run_sequence(table.iter().copied(), &mut delay),
            Err(PanelError::InvalidArgument)
        );
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_run_sequence_counts_commands() {
        let log = new_log();
        let mut link = CommandMode::new(MockIo::new(&log));
        let mut delay = MockDelay { log: log.clone() };
        let table = [InitCommand::new(0x11, &[], 0), InitCommand::new(0x29, &[], 0)];

        assert_eq!(link.run_sequence(table.iter().copied(), &mut delay), Ok(2));
        assert_eq!(commands(&log), vec![0x11, 0x29]);
    }

    #[test]
    fn test_into_video_then_control_only() {
        let log = new_log();
        let link = CommandMode::new(MockIo::new(&log));
        let mut bus = MockBus::new(&log);
        let mut delay = MockDelay { log: log.clone() };

        let mut video = link.into_video(&mut bus, &DPI).unwrap();
        video
            .control()
            .send(ControlCommand::DisplayOn, &mut delay)
            .unwrap();
        video.panel().init().unwrap();

        assert_eq!(
            *log.borrow(),
            vec![Event::NewDpi, Event::Tx(0x29, vec![]), Event::VideoInit]
        );
    }

    #[test]
    fn test_into_video_rejects_invalid_config() {
        let log = new_log();
        let link = CommandMode::new(MockIo::new(&log));
        let mut bus = MockBus::new(&log);
        let mut dpi = DPI;
        dpi.timing.v_size = 0;

        assert!(matches!(
            link.into_video(&mut bus, &dpi),
            Err(PanelError::InvalidArgument)
        ));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_video_error_kinds() {
        let log = new_log();
        let mut bus = MockBus::new(&log);
        bus.fail = Some(ErrorKind::Timeout);

        let result = CommandMode::new(MockIo::new(&log)).into_video(&mut bus, &DPI);
        assert!(matches!(result, Err(PanelError::Video(ErrorKind::Timeout))));
    }

    #[test]
    fn test_close_returns_transport() {
        let log = new_log();
        let mut bus = MockBus::new(&log);
        let video = CommandMode::new(MockIo::new(&log))
            .into_video(&mut bus, &DPI)
            .unwrap();

        let (mut io, result) = video.close();
        assert!(result.is_ok());
        io.tx_param(0x01, &[]).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![Event::NewDpi, Event::VideoDelete, Event::Tx(0x01, vec![])]
        );
    }

    #[test]
    fn test_settle_after_sleep_out() {
        let log = new_log();
        let mut link = CommandMode::new(MockIo::new(&log));
        let mut delay = MockDelay { log: log.clone() };

        link.control(ControlCommand::SleepOut, &mut delay).unwrap();
        link.control(ControlCommand::DisplayOn, &mut delay).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Event::Tx(0x11, vec![]),
                Event::DelayMs(120),
                Event::Tx(0x29, vec![]),
            ]
        );
    }
}

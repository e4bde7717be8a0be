//! AXS15260 MIPI-DSI panel driver
//!
//! Bring-up happens in [`Axs15260Panel::new`]: with a MIPI video path the
//! full command-mode init table is sent first and only then is the DPI
//! video panel created, because the link cannot carry register writes once
//! it streams video. Without a video path the panel stays in command mode
//! and no table is sent.
//!
//! # Reset timing
//!
//! ```text
//! RST  active ─10 ms─ inactive ─10 ms─ active ─170 ms─ ready
//! ```
//! Without a reset line a software reset (0x01) is sent and the same
//! 170 ms recovery applies.

use axs15260_core::config::{Axs15260VendorConfig, MipiConfig, PanelDevConfig};
use axs15260_core::state::{PanelEvent, PanelState};
use axs15260_core::traits::{Area, DisplayPanel};
use axs15260_core::PanelError;
use axs15260_hal::{CommandTransport, DsiBus, VideoPanel};
use axs15260_protocol::dcs::RESET_RECOVERY_MS;
use axs15260_protocol::{init, ColorMode, ControlCommand, InitCommand, Madctl};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use super::link::{CommandMode, VideoLink};

/// Reset pulse timing in milliseconds
const RESET_SETTLE_MS: u32 = 10;
const RESET_PULSE_MS: u32 = 10;

enum Link<T, V> {
    Command(CommandMode<T>),
    Video(VideoLink<T, V>),
}

/// AXS15260 panel
///
/// - `T`: command-mode transport
/// - `V`: DPI video panel (`Infallible` when there is no video path)
/// - `RST`: reset pin
/// - `D`: delay provider
pub struct Axs15260Panel<T, V, RST, D> {
    link: Link<T, V>,
    reset_pin: Option<RST>,
    reset_active_high: bool,
    color_mode: ColorMode,
    madctl: Madctl,
    mirror_by_cmd: bool,
    state: PanelState,
    delay: D,
}

impl<T, V, RST, D> Axs15260Panel<T, V, RST, D>
where
    T: CommandTransport,
    V: VideoPanel,
    RST: OutputPin,
    D: DelayNs,
{
    /// Create the panel
    ///
    /// With `vendor_config.mipi` set this sends the init table (the custom
    /// one if non-empty, the built-in one otherwise) and creates the video
    /// panel. Configuration is validated before anything is transmitted.
    pub fn new<B>(
        io: T,
        dev_config: &PanelDevConfig,
        reset_pin: Option<RST>,
        vendor_config: Axs15260VendorConfig<'_, B>,
        mut delay: D,
    ) -> Result<Self, PanelError>
    where
        B: DsiBus<Panel = V>,
    {
        let color_mode = dev_config.color_mode();
        let custom = vendor_config.init_cmds;
        if !custom.iter().all(InitCommand::is_valid) {
            return Err(PanelError::InvalidArgument);
        }

        let mut command = CommandMode::new(io);
        let mut state = PanelState::Uninitialized;

        let link = match vendor_config.mipi {
            Some(MipiConfig {
                mut dsi_bus,
                dpi_config,
            }) => {
                if !dpi_config.is_valid() {
                    return Err(PanelError::InvalidArgument);
                }

                let sent = if custom.is_empty() {
                    debug!("sending default init sequence");
                    command.run_sequence(init::default_sequence(color_mode), &mut delay)?
                } else {
                    debug!("sending custom init sequence");
                    command.run_sequence(custom.iter().copied(), &mut delay)?
                };
                info!("init sequence sent ({} commands)", sent);
                state = state.transition(PanelEvent::InitSequenceSent);

                let video = command.into_video(&mut dsi_bus, dpi_config)?;
                state = state.transition(PanelEvent::VideoPanelCreated);
                info!(
                    "DPI video panel created ({}x{})",
                    dpi_config.timing.h_size,
                    dpi_config.timing.v_size
                );
                Link::Video(video)
            }
            None => Link::Command(command),
        };

        Ok(Self {
            link,
            reset_pin,
            reset_active_high: dev_config.reset_active_high,
            color_mode,
            madctl: dev_config.madctl(),
            mirror_by_cmd: vendor_config.mirror_by_cmd,
            state,
            delay,
        })
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn madctl(&self) -> Madctl {
        self.madctl
    }

    /// The DPI video panel, if the link streams video
    pub fn dpi_panel(&mut self) -> Option<&mut V> {
        match &mut self.link {
            Link::Video(video) => Some(video.panel()),
            Link::Command(_) => None,
        }
    }

    /// Register access, only while the link is still in command mode
    pub fn command_mode(&mut self) -> Option<&mut CommandMode<T>> {
        match &mut self.link {
            Link::Command(command) => Some(command),
            Link::Video(_) => None,
        }
    }

    /// Tear down the panel
    ///
    /// Deletes the video panel and hands back the transport, reset pin and
    /// delay. A failed delete is logged; teardown still completes.
    pub fn release(self) -> (T, Option<RST>, D) {
        let io = match self.link {
            Link::Command(command) => command.into_inner(),
            Link::Video(video) => {
                let (io, result) = video.close();
                if let Err(e) = result {
                    warn!("video panel delete failed: {}", e);
                }
                io
            }
        };
        info!("panel released");
        (io, self.reset_pin, self.delay)
    }

    fn control(&mut self, command: ControlCommand) -> Result<(), PanelError> {
        match &mut self.link {
            Link::Command(link) => link.control(command, &mut self.delay),
            Link::Video(link) => link.control().send(command, &mut self.delay),
        }
    }

    fn drive_reset(&mut self, active: bool) -> Result<(), PanelError> {
        let level = active == self.reset_active_high;
        match self.reset_pin.as_mut() {
            Some(pin) => pin.set_state(PinState::from(level)).map_err(PanelError::pin),
            None => Ok(()),
        }
    }
}

impl<T, V, RST, D> DisplayPanel for Axs15260Panel<T, V, RST, D>
where
    T: CommandTransport,
    V: VideoPanel,
    RST: OutputPin,
    D: DelayNs,
{
    fn reset(&mut self) -> Result<(), PanelError> {
        if self.reset_pin.is_some() {
            info!("hardware reset");
            self.drive_reset(true)?;
            self.delay.delay_ms(RESET_SETTLE_MS);
            self.drive_reset(false)?;
            self.delay.delay_ms(RESET_PULSE_MS);
            self.drive_reset(true)?;
            self.delay.delay_ms(RESET_RECOVERY_MS);
        } else {
            info!("software reset");
            self.control(ControlCommand::SoftReset)?;
        }
        self.state = self.state.transition(PanelEvent::HardwareReset);
        Ok(())
    }

    fn init(&mut self) -> Result<(), PanelError> {
        if let Link::Video(video) = &mut self.link {
            video.panel().init().map_err(PanelError::video)?;
            info!("video streaming started");
        }
        Ok(())
    }

    fn draw_bitmap(&mut self, area: Area, data: &[u8]) -> Result<(), PanelError> {
        let Link::Video(video) = &mut self.link else {
            return Ok(());
        };
        let needed = area.pixel_count() * self.color_mode.bytes_per_pixel();
        if !area.is_valid() || data.len() < needed {
            return Err(PanelError::InvalidArgument);
        }
        video
            .panel()
            .draw_bitmap(area.x_start, area.y_start, area.x_end, area.y_end, data)
            .map_err(PanelError::video)
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), PanelError> {
        self.control(ControlCommand::invert(invert))
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), PanelError> {
        match &mut self.link {
            Link::Command(command) if self.mirror_by_cmd => {
                let madctl = self.madctl.with_mirror(mirror_x, mirror_y);
                command.set_madctl(madctl)?;
                self.madctl = madctl;
                debug!("MADCTL {=u8:#x}", madctl.bits());
            }
            _ => {
                if mirror_x || mirror_y {
                    warn!("mirror not done in hardware, rotate in software");
                }
            }
        }
        Ok(())
    }

    fn swap_xy(&mut self, swap: bool) -> Result<(), PanelError> {
        match &mut self.link {
            Link::Command(command) if self.mirror_by_cmd => {
                let madctl = self.madctl.with_swap(swap);
                command.set_madctl(madctl)?;
                self.madctl = madctl;
                debug!("MADCTL {=u8:#x}", madctl.bits());
            }
            _ => {
                if swap {
                    warn!("swap_xy not done in hardware, rotate in software");
                }
            }
        }
        Ok(())
    }

    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), PanelError> {
        match &mut self.link {
            Link::Video(video) => video
                .panel()
                .set_gap(x_gap, y_gap)
                .map_err(PanelError::video),
            Link::Command(_) => {
                warn!("set_gap needs the video panel");
                Err(PanelError::NotSupported)
            }
        }
    }

    fn display_on_off(&mut self, on: bool) -> Result<(), PanelError> {
        self.control(ControlCommand::display(on))?;
        info!("display {}", if on { "on" } else { "off" });
        Ok(())
    }

    fn sleep(&mut self, enter: bool) -> Result<(), PanelError> {
        self.control(ControlCommand::sleep(enter))?;
        let event = if enter {
            PanelEvent::SleepIn
        } else {
            PanelEvent::SleepOut
        };
        self.state = self.state.transition(event);
        info!("sleep {}", if enter { "entered" } else { "exited" });
        Ok(())
    }
}

//! AXS15260 I2C touch driver
//!
//! The controller sits at address 0x3B and answers a plain 8-byte read with
//! its status packet (see `axs15260_protocol::touch`). Reads are serialized
//! by a mutex so a task and a polling timer can share one driver; a reader
//! that cannot get the bus within 100 ms gets [`TouchError::Timeout`].
//!
//! The INT line goes low while a finger is down. Its falling edge is meant
//! to be routed to [`Axs15260Touch::on_interrupt`], which only raises the
//! registered [`TouchSignal`]; the actual read happens in task context.

use core::cell::{Cell, RefCell};

use axs15260_core::config::TouchConfig;
use axs15260_core::traits::TouchInput;
use axs15260_core::TouchError;
use axs15260_hal::{Edge, InterruptPin};
use axs15260_protocol::touch::{self, I2C_ADDR, PACKET_LEN, REG_VERSION};
use axs15260_protocol::transform::TRANSFORM_MASK;
use axs15260_protocol::{TouchFrame, Transform};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_sync::signal::Signal;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use portable_atomic::{AtomicU8, Ordering};

/// Notification raised from the touch interrupt
pub type TouchSignal = Signal<CriticalSectionRawMutex, ()>;

/// Bound on waiting for the bus lock
const LOCK_TIMEOUT_MS: u32 = 100;
const LOCK_POLL_MS: u32 = 1;

/// Reset timing: inactive, active (low), inactive
const RESET_LEAD_MS: u32 = 1;
const RESET_PULSE_MS: u32 = 10;
const RESET_RECOVERY_MS: u32 = 110;

/// Set once construction finished; shares the byte with the transform bits
const INITIALIZED: u8 = 1 << 7;

struct Bus<I2C, RST> {
    i2c: I2C,
    rst: Option<RST>,
    buf: [u8; PACKET_LEN],
}

/// AXS15260 touch controller
pub struct Axs15260Touch<I2C, RST, INT> {
    bus: Mutex<CriticalSectionRawMutex, Bus<I2C, RST>>,
    int_pin: BlockingMutex<CriticalSectionRawMutex, RefCell<Option<INT>>>,
    notifier: BlockingMutex<CriticalSectionRawMutex, Cell<Option<&'static TouchSignal>>>,
    flags: AtomicU8,
    x_max: u16,
    y_max: u16,
}

impl<I2C, RST, INT> Axs15260Touch<I2C, RST, INT>
where
    I2C: I2c,
    RST: OutputPin,
    INT: InterruptPin,
{
    /// Create the driver
    ///
    /// Drives the reset line inactive and arms the INT falling edge. A
    /// firmware version read checks the bus; its failure is only logged.
    pub fn new<D: DelayNs + ?Sized>(
        i2c: I2C,
        config: &TouchConfig,
        mut rst: Option<RST>,
        mut int_pin: Option<INT>,
        delay: &mut D,
    ) -> Result<Self, TouchError> {
        let (x_max, y_max) = config.bounds()?;

        if let Some(pin) = rst.as_mut() {
            pin.set_high().map_err(TouchError::pin)?;
        }
        if let Some(pin) = int_pin.as_mut() {
            pin.enable_interrupt(Edge::Falling)
                .map_err(TouchError::pin)?;
        }

        let touch = Self {
            bus: Mutex::new(Bus {
                i2c,
                rst,
                buf: [0xFF; PACKET_LEN],
            }),
            int_pin: BlockingMutex::new(RefCell::new(int_pin)),
            notifier: BlockingMutex::new(Cell::new(None)),
            flags: AtomicU8::new(config.transform().to_bits()),
            x_max,
            y_max,
        };

        match touch.get_version(delay) {
            Ok(version) => info!("touch firmware {=u16:#x}", version),
            Err(e) => warn!("touch version read failed: {}", e),
        }

        touch.flags.fetch_or(INITIALIZED, Ordering::AcqRel);
        info!("touch ready ({}x{})", x_max, y_max);
        Ok(touch)
    }

    fn lock<D: DelayNs + ?Sized>(
        &self,
        delay: &mut D,
    ) -> Result<MutexGuard<'_, CriticalSectionRawMutex, Bus<I2C, RST>>, TouchError> {
        let mut waited = 0;
        loop {
            if let Ok(guard) = self.bus.try_lock() {
                return Ok(guard);
            }
            if waited >= LOCK_TIMEOUT_MS {
                debug!("touch bus busy for {} ms", waited);
                return Err(TouchError::Timeout);
            }
            delay.delay_ms(LOCK_POLL_MS);
            waited += LOCK_POLL_MS;
        }
    }

    /// Read and decode one status packet
    ///
    /// Corrupt or ESD-flagged packets are not errors; they come back as a
    /// frame with no points.
    pub fn read<D: DelayNs + ?Sized>(&self, delay: &mut D) -> Result<TouchFrame, TouchError> {
        let mut guard = self.lock(delay)?;
        let bus = &mut *guard;

        bus.buf = [0xFF; PACKET_LEN];
        bus.i2c
            .read(I2C_ADDR, &mut bus.buf)
            .map_err(TouchError::bus)?;

        let frame = match touch::decode(&bus.buf, self.transform(), self.x_max, self.y_max) {
            Ok(frame) => frame,
            Err(rejected) => {
                trace!("touch packet discarded: {}", rejected);
                rejected.frame()
            }
        };
        Ok(frame)
    }

    /// Pulse the reset line; no-op without one
    pub fn reset<D: DelayNs + ?Sized>(&self, delay: &mut D) -> Result<(), TouchError> {
        let mut guard = self.lock(delay)?;
        let Some(rst) = guard.rst.as_mut() else {
            return Ok(());
        };

        rst.set_high().map_err(TouchError::pin)?;
        delay.delay_ms(RESET_LEAD_MS);
        rst.set_low().map_err(TouchError::pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        rst.set_high().map_err(TouchError::pin)?;
        delay.delay_ms(RESET_RECOVERY_MS);
        info!("touch reset");
        Ok(())
    }

    /// Controller firmware version
    pub fn get_version<D: DelayNs + ?Sized>(&self, delay: &mut D) -> Result<u16, TouchError> {
        let mut guard = self.lock(delay)?;
        let mut data = [0u8; 2];
        guard
            .i2c
            .write_read(I2C_ADDR, &[REG_VERSION], &mut data)
            .map_err(TouchError::bus)?;
        Ok(touch::version(data))
    }

    /// Raise `signal` on every touch interrupt
    ///
    /// Replaces any previously registered signal and (re)arms the falling
    /// edge.
    pub fn register_notifier(&self, signal: &'static TouchSignal) -> Result<(), TouchError> {
        self.notifier.lock(|n| n.set(Some(signal)));
        self.int_pin.lock(|pin| match pin.borrow_mut().as_mut() {
            Some(pin) => pin.enable_interrupt(Edge::Falling).map_err(TouchError::pin),
            None => Ok(()),
        })?;
        info!("touch interrupt enabled");
        Ok(())
    }

    /// Interrupt-context entry point
    pub fn on_interrupt(&self) {
        self.notifier.lock(|n| {
            if let Some(signal) = n.get() {
                signal.signal(());
            }
        });
    }

    /// Replace the coordinate transform; applies to the next read
    pub fn set_transform(&self, transform: Transform) {
        let bits = transform.to_bits();
        // The closure always returns Some, so this cannot fail
        let _ = self
            .flags
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |flags| {
                Some((flags & !TRANSFORM_MASK) | bits)
            });
        info!(
            "touch transform: swap_xy={} mirror_x={} mirror_y={}",
            transform.swap_xy,
            transform.mirror_x,
            transform.mirror_y
        );
    }

    pub fn transform(&self) -> Transform {
        Transform::from_bits(self.flags.load(Ordering::Acquire))
    }

    /// INT held low means a finger is down; false without an INT pin
    pub fn is_pressed(&self) -> bool {
        self.int_pin.lock(|pin| {
            pin.borrow_mut()
                .as_mut()
                .is_some_and(|pin| pin.is_low().unwrap_or(false))
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.flags.load(Ordering::Acquire) & INITIALIZED != 0
    }

    /// Screen bounds in touch coordinates
    pub fn bounds(&self) -> (u16, u16) {
        (self.x_max, self.y_max)
    }

    /// Tear down the driver
    ///
    /// Disarms the interrupt and hands back the bus and pins.
    pub fn release(self) -> (I2C, Option<RST>, Option<INT>) {
        let mut int_pin = self.int_pin.into_inner().into_inner();
        if let Some(pin) = int_pin.as_mut() {
            if let Err(e) = pin.disable_interrupt() {
                let kind = embedded_hal::digital::Error::kind(&e);
                warn!("touch interrupt disable failed: {}", kind);
            }
        }
        let bus = self.bus.into_inner();
        info!("touch released");
        (bus.i2c, bus.rst, int_pin)
    }
}

impl<I2C, RST, INT> TouchInput for Axs15260Touch<I2C, RST, INT>
where
    I2C: I2c,
    RST: OutputPin,
    INT: InterruptPin,
{
    fn read_frame(&self, delay: &mut dyn DelayNs) -> Result<TouchFrame, TouchError> {
        self.read(delay)
    }

    fn is_pressed(&self) -> bool {
        Axs15260Touch::is_pressed(self)
    }

    fn set_transform(&self, transform: Transform) {
        Axs15260Touch::set_transform(self, transform)
    }
}

//! Mock panel peripherals recording into a shared event log

extern crate std;

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use core::convert::Infallible;

use axs15260_hal::{CommandTransport, DpiConfig, DsiBus, ErrorKind, VideoPanel};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Tx(u8, Vec<u8>),
    DelayMs(u32),
    Pin(bool),
    NewDpi,
    VideoInit,
    Draw(u16, u16, u16, u16, usize),
    Gap(u16, u16),
    VideoDelete,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Commands sent, in order
pub fn commands(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|e| match e {
            Event::Tx(cmd, _) => Some(*cmd),
            _ => None,
        })
        .collect()
}

pub fn position(log: &Log, event: &Event) -> Option<usize> {
    log.borrow().iter().position(|e| e == event)
}

pub struct MockIo {
    pub log: Log,
    pub fail: Option<ErrorKind>,
}

impl MockIo {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail: None,
        }
    }
}

impl CommandTransport for MockIo {
    type Error = ErrorKind;

    fn tx_param(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
        if let Some(kind) = self.fail {
            return Err(kind);
        }
        self.log
            .borrow_mut()
            .push(Event::Tx(command, params.to_vec()));
        Ok(())
    }
}

pub struct MockDelay {
    pub log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub struct MockPin {
    pub log: Log,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(true));
        Ok(())
    }
}

pub struct MockBus {
    pub log: Log,
    pub fail: Option<ErrorKind>,
}

impl MockBus {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            fail: None,
        }
    }
}

impl DsiBus for MockBus {
    type Error = ErrorKind;
    type Panel = MockVideo;

    fn new_dpi_panel(&mut self, _config: &DpiConfig) -> Result<Self::Panel, Self::Error> {
        if let Some(kind) = self.fail {
            return Err(kind);
        }
        self.log.borrow_mut().push(Event::NewDpi);
        Ok(MockVideo {
            log: self.log.clone(),
            fail_delete: false,
        })
    }
}

pub struct MockVideo {
    pub log: Log,
    pub fail_delete: bool,
}

impl VideoPanel for MockVideo {
    type Error = ErrorKind;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::VideoInit);
        Ok(())
    }

    fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        self.log
            .borrow_mut()
            .push(Event::Draw(x_start, y_start, x_end, y_end, data.len()));
        Ok(())
    }

    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Gap(x_gap, y_gap));
        Ok(())
    }

    fn delete(self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::VideoDelete);
        if self.fail_delete {
            Err(ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

//! Touch status packet
//!
//! The controller reports up to five contacts but a plain read returns
//! only the first 8 bytes of the report, so exactly one point is decoded.
//! Packets that fail the validity or ESD checks are not errors: they decode
//! to a frame with no points, so a glitch never reads as a touch.

use heapless::Vec;

use crate::transform::Transform;

/// 7-bit I2C address
pub const I2C_ADDR: u8 = 0x3B;
/// Default bus clock
pub const I2C_FREQ_HZ: u32 = 100_000;
/// Contacts the controller can report
pub const MAX_POINTS: usize = 5;
/// Bytes per contact in the full report
pub const POINT_SIZE: usize = 6;
/// Bytes returned by one status read
pub const PACKET_LEN: usize = 8;
/// Firmware version register (2 bytes, big-endian)
pub const REG_VERSION: u8 = 0x0C;

/// Default screen width
pub const DEFAULT_X_MAX: u16 = 452;
/// Default screen height
pub const DEFAULT_Y_MAX: u16 = 1280;
/// Coordinates are 12 bits wide
pub const COORD_LIMIT: u16 = 4096;

const MAX_GESTURE: u8 = 0x0F;

/// Status nibbles seen during normal operation; anything else is ESD noise
const STATUS_OK: [u8; 3] = [0x0, 0x4, 0x8];

/// Contact phase reported for a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    #[default]
    Down,
    Up,
    Contact,
    Reserved,
}

impl TouchEvent {
    /// Decode the two-bit event field
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => TouchEvent::Down,
            1 => TouchEvent::Up,
            2 => TouchEvent::Contact,
            _ => TouchEvent::Reserved,
        }
    }
}

/// One decoded contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
    /// Track id, 0-4
    pub id: u8,
    pub event: TouchEvent,
    /// Pressure
    pub weight: u8,
    pub area: u8,
}

/// Result of one status read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchFrame {
    pub gesture_id: u8,
    /// Contacts reported by the controller (0-5)
    pub point_num: u8,
    points: Vec<TouchPoint, MAX_POINTS>,
}

impl TouchFrame {
    /// Frame with no contacts
    pub const fn empty(gesture_id: u8) -> Self {
        Self {
            gesture_id,
            point_num: 0,
            points: Vec::new(),
        }
    }

    /// Decoded contacts; at most the first reported one
    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.point_num == 0
    }
}

/// Why a packet was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejected {
    /// Gesture or point count out of range, usually a bus glitch
    Invalid { gesture: u8, count: u8 },
    /// Unexpected status nibble
    Esd { gesture_id: u8, status: u8 },
}

impl Rejected {
    /// Frame reported in place of the discarded packet
    pub const fn frame(&self) -> TouchFrame {
        match *self {
            Rejected::Invalid { .. } => TouchFrame::empty(0),
            Rejected::Esd { gesture_id, .. } => TouchFrame::empty(gesture_id),
        }
    }
}

/// Decode a status packet into screen coordinates
pub fn decode(
    buf: &[u8; PACKET_LEN],
    transform: Transform,
    x_max: u16,
    y_max: u16,
) -> Result<TouchFrame, Rejected> {
    let gesture = buf[0];
    let count = buf[1] & 0x0F;
    let status = buf[1] >> 4;

    if gesture > MAX_GESTURE || count as usize > MAX_POINTS {
        return Err(Rejected::Invalid { gesture, count });
    }
    if !STATUS_OK.contains(&status) {
        return Err(Rejected::Esd {
            gesture_id: gesture,
            status,
        });
    }

    let mut frame = TouchFrame::empty(gesture);
    frame.point_num = count;
    if count > 0 {
        let raw_x = u16::from(buf[2] & 0x0F) << 8 | u16::from(buf[3]);
        let raw_y = u16::from(buf[4] & 0x0F) << 8 | u16::from(buf[5]);
        let (x, y) = transform.apply(raw_x, raw_y, x_max, y_max);
        // Capacity is MAX_POINTS, the first push cannot fail
        let _ = frame.points.push(TouchPoint {
            x,
            y,
            id: buf[4] >> 4,
            event: TouchEvent::from_bits(buf[2] >> 6),
            weight: buf[6],
            area: buf[7] >> 4,
        });
    }
    Ok(frame)
}

/// Firmware version from the two bytes of [`REG_VERSION`]
pub const fn version(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

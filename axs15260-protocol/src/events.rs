//! Pointer events for an input-consumption layer
//!
//! GUI toolkits want a single pointer with a pressed/released state rather
//! than raw touch frames. [`PointerTracker`] converts one into the other
//! and remembers where the last contact was, so a release is reported at
//! the position the finger left.

use crate::touch::{TouchEvent, TouchFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerState {
    Pressed,
    #[default]
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerEvent {
    pub x: u16,
    pub y: u16,
    pub state: PointerState,
}

/// Single-pointer view of the touch stream
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    last_x: u16,
    last_y: u16,
}

impl PointerTracker {
    pub const fn new() -> Self {
        Self {
            last_x: 0,
            last_y: 0,
        }
    }

    /// Fold one frame into a pointer event
    pub fn update(&mut self, frame: &TouchFrame) -> PointerEvent {
        let Some(point) = frame.points().first() else {
            return PointerEvent {
                x: self.last_x,
                y: self.last_y,
                state: PointerState::Released,
            };
        };

        self.last_x = point.x;
        self.last_y = point.y;
        let state = match point.event {
            TouchEvent::Up => PointerState::Released,
            _ => PointerState::Pressed,
        };
        PointerEvent {
            x: point.x,
            y: point.y,
            state,
        }
    }

    /// Last reported position
    pub fn position(&self) -> (u16, u16) {
        (self.last_x, self.last_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::touch::{decode, PACKET_LEN};
    use crate::transform::Transform;

    fn frame(buf: [u8; PACKET_LEN]) -> TouchFrame {
        decode(&buf, Transform::IDENTITY, 452, 1280).unwrap()
    }

    #[test]
    fn test_press_move_release() {
        let mut tracker = PointerTracker::new();

        let ev = tracker.update(&frame([0, 1, 0x00, 10, 0, 20, 0, 0]));
        assert_eq!(ev.state, PointerState::Pressed);
        assert_eq!((ev.x, ev.y), (10, 20));

        let ev = tracker.update(&frame([0, 1, 0x80, 11, 0, 21, 0, 0]));
        assert_eq!(ev.state, PointerState::Pressed);
        assert_eq!((ev.x, ev.y), (11, 21));

        let ev = tracker.update(&frame([0, 1, 0x40, 12, 0, 22, 0, 0]));
        assert_eq!(ev.state, PointerState::Released);
        assert_eq!((ev.x, ev.y), (12, 22));
    }

    #[test]
    fn test_empty_frame_releases_at_last_position() {
        let mut tracker = PointerTracker::new();
        tracker.update(&frame([0, 1, 0x00, 30, 0, 40, 0, 0]));

        let ev = tracker.update(&TouchFrame::empty(0));
        assert_eq!(ev.state, PointerState::Released);
        assert_eq!((ev.x, ev.y), (30, 40));
        assert_eq!(tracker.position(), (30, 40));
    }

    #[test]
    fn test_initial_release_at_origin() {
        let mut tracker = PointerTracker::new();
        let ev = tracker.update(&TouchFrame::empty(0));
        assert_eq!(ev, PointerEvent::default());
    }
}

//! Touch input source

use axs15260_protocol::{PointerEvent, PointerTracker, TouchFrame, Transform};
use embedded_hal::delay::DelayNs;

use crate::error::TouchError;

/// Touch controller seen by an input-consumption layer
pub trait TouchInput {
    /// Read the current touch frame
    ///
    /// `delay` paces the wait for a concurrent reader to finish.
    fn read_frame(&self, delay: &mut dyn DelayNs) -> Result<TouchFrame, TouchError>;

    /// Whether a finger is on the panel, without a bus transfer
    fn is_pressed(&self) -> bool;

    /// Replace the coordinate transform for subsequent reads
    fn set_transform(&self, transform: Transform);

    /// Read a frame and fold it into a single-pointer event
    fn poll_pointer(
        &self,
        tracker: &mut PointerTracker,
        delay: &mut dyn DelayNs,
    ) -> Result<PointerEvent, TouchError> {
        let frame = self.read_frame(delay)?;
        Ok(tracker.update(&frame))
    }
}

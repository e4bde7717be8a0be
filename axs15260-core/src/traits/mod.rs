//! Driver-facing traits
//!
//! These traits define the interface between the application (or a GUI
//! toolkit's display/input layer) and the panel and touch drivers.

pub mod panel;
pub mod touch;

pub use panel::{Area, DisplayPanel, DisplayPanelExt};
pub use touch::TouchInput;

//! Configuration types
//!
//! Everything a board needs to describe its panel and touch wiring. The
//! vendor presets for the 452x1280 bar panel live in `axs15260-hal`.

pub mod panel;
pub mod touch;

pub use panel::*;
pub use touch::*;

//! Panel driver implementations

pub mod axs15260;
pub mod link;

#[cfg(test)]
pub(crate) mod mock;

pub use axs15260::Axs15260Panel;
pub use link::{CommandMode, ControlChannel, VideoLink};

//! Touch driver implementations

pub mod axs15260;

pub use axs15260::{Axs15260Touch, TouchSignal};

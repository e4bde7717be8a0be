//! Panel lifecycle state machine
//!
//! Tracks where the panel is between power-on and teardown. The
//! command-mode to video-mode edge is one-way: no event leads from a
//! video state back to [`PanelState::CommandModeReady`].

pub mod events;
pub mod machine;

pub use events::PanelEvent;
pub use machine::PanelState;

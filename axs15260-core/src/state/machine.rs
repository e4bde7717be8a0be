//! State machine definition

use super::events::PanelEvent;

/// Panel lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    /// Power-on, nothing sent yet
    Uninitialized,
    /// Controller reset, registers at their defaults
    Reset,
    /// Init table sent, command-mode traffic allowed
    CommandModeReady,
    /// DPI video panel streaming
    VideoStreaming,
    /// Asleep; `video` records which mode the panel wakes into
    Sleeping { video: bool },
    /// Torn down
    Deleted,
}

impl PanelState {
    /// Whether register writes over the command transport are allowed
    pub fn allows_register_traffic(&self) -> bool {
        matches!(
            self,
            PanelState::Uninitialized
                | PanelState::Reset
                | PanelState::CommandModeReady
                | PanelState::Sleeping { video: false }
        )
    }

    /// Whether the link has switched to video mode
    pub fn is_video(&self) -> bool {
        matches!(
            self,
            PanelState::VideoStreaming | PanelState::Sleeping { video: true }
        )
    }

    pub fn is_sleeping(&self) -> bool {
        matches!(self, PanelState::Sleeping { .. })
    }

    /// Process an event and return the next state
    pub fn transition(self, event: PanelEvent) -> Self {
        use PanelEvent::*;
        use PanelState::*;

        match (self, event) {
            // Teardown is always possible and final
            (Deleted, _) => Deleted,
            (_, Delete) => Deleted,

            // Command-mode bring-up
            (Uninitialized, HardwareReset) => Reset,
            (Uninitialized | Reset, InitSequenceSent) => CommandModeReady,
            (CommandModeReady, HardwareReset) => Reset,
            (Uninitialized | Reset | CommandModeReady, VideoPanelCreated) => VideoStreaming,
            (Sleeping { video: false }, VideoPanelCreated) => Sleeping { video: true },

            // A reset in video mode restarts the controller but the host
            // keeps streaming
            (VideoStreaming, HardwareReset) => VideoStreaming,
            (Sleeping { video: true }, HardwareReset) => VideoStreaming,
            (Sleeping { video: false }, HardwareReset) => Reset,

            // Sleep
            (VideoStreaming, SleepIn) => Sleeping { video: true },
            (CommandModeReady | Reset, SleepIn) => Sleeping { video: false },
            (Sleeping { video: true }, SleepOut) => VideoStreaming,
            (Sleeping { video: false }, SleepOut) => CommandModeReady,

            // Default: stay in current state
            _ => self,
        }
    }
}

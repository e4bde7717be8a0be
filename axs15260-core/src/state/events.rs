//! Events that trigger panel state transitions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelEvent {
    /// Reset pulse or software reset completed
    HardwareReset,
    /// Command-mode init table sent
    InitSequenceSent,
    /// DPI video panel created, link now streams video
    VideoPanelCreated,
    /// Sleep-in sent
    SleepIn,
    /// Sleep-out sent
    SleepOut,
    /// Driver torn down
    Delete,
}

//! Timestamps the cage module keeps between uplinks.
//!
//! Each field is written by exactly one input handler and only ever moves
//! forward, since every source it is fed from is monotonic.

/// Most recent button/door timings, in ms since boot.  All zero until the
/// corresponding event has been seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CageContext {
    pub(super) last_button_release_ms: u32,
    pub(super) last_door_opened_ms: u32,
    pub(super) last_door_closed_ms: u32,
}

impl CageContext {
    /// Release time of the last completed button press, as recorded by the
    /// Event Source.
    pub fn last_button_release_ms(&self) -> u32 {
        self.last_button_release_ms
    }

    pub fn last_door_opened_ms(&self) -> u32 {
        self.last_door_opened_ms
    }

    pub fn last_door_closed_ms(&self) -> u32 {
        self.last_door_closed_ms
    }
}

//! Inbound input notifications.
//!
//! The Event Source (see [`ButtonSource`](super::ports::ButtonSource))
//! delivers one [`InputChange`] per debounced transition.  The cage module
//! routes it to the handler registered for its [`InputRole`].

/// Debounced level of a monitored input.
///
/// For the door contact `Released` means the contact opened (door open);
/// for the button it means the button came up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Classification of a completed press, computed by the Event Source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressType {
    /// No completed press yet, or the press is still in progress.
    #[default]
    Unknown,
    Short,
    Long,
}

/// Which handler an input is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    UserButton,
    DoorContact,
}

/// A single debounced state change, as delivered by the Event Source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputChange {
    pub io: u8,
    pub role: InputRole,
    pub state: ButtonState,
    pub press_type: PressType,
}

//! Debounced digital input with press classification.
//!
//! ## Hardware
//!
//! Active-low contact with pull-up: the button and the door reed switch
//! both pull the line LOW when pressed / closed.  The caller samples the
//! raw level at its loop rate and feeds it to [`DebouncedInput::update`]
//! (or lets [`DebouncedInput::poll`] read an `embedded-hal` pin).
//!
//! ## Debounce
//!
//! A new level must hold for [`DEBOUNCE_MS`] before it is accepted.  The
//! reported edge time is when the new level was first seen, not when it
//! was accepted.
//!
//! | Press type | Condition on release         |
//! |------------|------------------------------|
//! | `Short`    | held < 5s                    |
//! | `Long`     | held >= 5s                   |

use embedded_hal::digital::InputPin;

use crate::app::events::{ButtonState, PressType};

pub const DEBOUNCE_MS: u32 = 50;
pub const LONG_PRESS_MS: u32 = 5000;

/// An accepted (debounced) transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub state: ButtonState,
    /// When the new level was first observed (ms since boot).
    pub at_ms: u32,
    /// Classification of the press this edge completes; `Unknown` on press.
    pub press_type: PressType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Stable,
    Settling { since_ms: u32 },
}

pub struct DebouncedInput {
    pressed: bool,
    state: DebounceState,
    pressed_at_ms: u32,
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl DebouncedInput {
    /// Starts released.
    pub fn new() -> Self {
        Self {
            pressed: false,
            state: DebounceState::Stable,
            pressed_at_ms: 0,
        }
    }

    /// Current debounced level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Feed one raw sample.  `pressed` is the electrical level already
    /// mapped to "active".
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> Option<Edge> {
        if pressed == self.pressed {
            // Bounce back to the stable level before the window elapsed.
            self.state = DebounceState::Stable;
            return None;
        }

        match self.state {
            DebounceState::Stable => {
                self.state = DebounceState::Settling { since_ms: now_ms };
                None
            }
            DebounceState::Settling { since_ms } => {
                if now_ms.wrapping_sub(since_ms) < DEBOUNCE_MS {
                    return None;
                }
                self.pressed = pressed;
                self.state = DebounceState::Stable;
                Some(self.accept(since_ms))
            }
        }
    }

    /// Sample an active-low pin.
    pub fn poll<P: InputPin>(
        &mut self,
        pin: &mut P,
        now_ms: u32,
    ) -> Result<Option<Edge>, P::Error> {
        let pressed = pin.is_low()?;
        Ok(self.update(pressed, now_ms))
    }

    fn accept(&mut self, at_ms: u32) -> Edge {
        if self.pressed {
            self.pressed_at_ms = at_ms;
            Edge {
                state: ButtonState::Pressed,
                at_ms,
                press_type: PressType::Unknown,
            }
        } else {
            let held_ms = at_ms.wrapping_sub(self.pressed_at_ms);
            let press_type = if held_ms >= LONG_PRESS_MS {
                PressType::Long
            } else {
                PressType::Short
            };
            Edge {
                state: ButtonState::Released,
                at_ms,
                press_type,
            }
        }
    }
}

//! Cage module configuration
//!
//! Board wiring for the two monitored inputs.  Defaults come from
//! [`pins`](crate::pins); a negative index disables that input.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Input wiring for the cage module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CageConfig {
    /// GPIO index of the user test button (negative = not fitted)
    pub button_io: i8,
    /// GPIO index of the door reed contact (negative = not fitted)
    pub door_io: i8,
}

impl Default for CageConfig {
    fn default() -> Self {
        Self {
            button_io: pins::BUTTON_IO,
            door_io: pins::DOOR_IO,
        }
    }
}

impl CageConfig {
    /// Button input index, or `None` when the button is not fitted.
    pub fn button(&self) -> Option<u8> {
        fitted(self.button_io)
    }

    /// Door contact input index, or `None` when the contact is not fitted.
    pub fn door(&self) -> Option<u8> {
        fitted(self.door_io)
    }

    /// Reject wiring where both roles claim the same input.
    pub fn validate(&self) -> Result<()> {
        match (self.button(), self.door()) {
            (Some(b), Some(d)) if b == d => Err(Error::Config("button and door share an input")),
            _ => Ok(()),
        }
    }
}

fn fitted(io: i8) -> Option<u8> {
    u8::try_from(io).ok()
}

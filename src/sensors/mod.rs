//! Sensor manager: the board's debounced-input Event Source.
//!
//! Owns one [`DebouncedInput`] per registered GPIO, keeps the last press /
//! release timestamps and press type for each, and turns accepted edges
//! into [`InputChange`] notifications tagged with the role the input was
//! registered under.  The main loop hands those to the cage module.
//!
//! Timestamps are recorded *before* the change is returned, so a handler
//! querying [`ButtonSource::last_release_ts`] sees the edge it is handling.

pub mod input;

use embedded_hal::digital::InputPin;
use log::{info, warn};

use crate::app::events::{ButtonState, InputChange, InputRole, PressType};
use crate::app::ports::ButtonSource;
use input::{DebouncedInput, Edge};

/// Maximum number of inputs with a registered callback.
pub const MAX_INPUTS: usize = 4;

struct InputSlot {
    io: u8,
    role: InputRole,
    input: DebouncedInput,
    last_press_ms: u32,
    last_release_ms: u32,
    last_press_type: PressType,
}

impl InputSlot {
    fn record(&mut self, edge: Edge) -> InputChange {
        match edge.state {
            ButtonState::Pressed => self.last_press_ms = edge.at_ms,
            ButtonState::Released => {
                self.last_release_ms = edge.at_ms;
                self.last_press_type = edge.press_type;
            }
        }
        InputChange {
            io: self.io,
            role: self.role,
            state: edge.state,
            press_type: edge.press_type,
        }
    }
}

#[derive(Default)]
pub struct SensorManager {
    slots: heapless::Vec<InputSlot, MAX_INPUTS>,
}

impl SensorManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a raw sample for `io`.  Samples for unregistered inputs are ignored.
    pub fn sample(&mut self, io: u8, pressed: bool, now_ms: u32) -> Option<InputChange> {
        let slot = self.slot_mut(io)?;
        let edge = slot.input.update(pressed, now_ms)?;
        Some(slot.record(edge))
    }

    /// Sample the active-low `pin` wired to `io`.
    pub fn poll<P: InputPin>(
        &mut self,
        io: u8,
        pin: &mut P,
        now_ms: u32,
    ) -> Result<Option<InputChange>, P::Error> {
        let Some(slot) = self.slot_mut(io) else {
            return Ok(None);
        };
        Ok(slot.input.poll(pin, now_ms)?.map(|edge| slot.record(edge)))
    }

    /// Role registered for `io`, if any.
    pub fn role(&self, io: u8) -> Option<InputRole> {
        self.slot(io).map(|s| s.role)
    }

    /// Number of inputs with a registered callback.
    pub fn registered_count(&self) -> usize {
        self.slots.len()
    }

    fn slot(&self, io: u8) -> Option<&InputSlot> {
        self.slots.iter().find(|s| s.io == io)
    }

    fn slot_mut(&mut self, io: u8) -> Option<&mut InputSlot> {
        self.slots.iter_mut().find(|s| s.io == io)
    }
}

impl ButtonSource for SensorManager {
    fn register_button_cb(&mut self, io: u8, role: InputRole) {
        if let Some(slot) = self.slot_mut(io) {
            warn!(
                "SRMgr: io {} re-registered as {:?} (was {:?})",
                io, role, slot.role
            );
            slot.role = role;
            return;
        }

        let slot = InputSlot {
            io,
            role,
            input: DebouncedInput::new(),
            last_press_ms: 0,
            last_release_ms: 0,
            last_press_type: PressType::Unknown,
        };
        if self.slots.push(slot).is_err() {
            warn!("SRMgr: no slot left for io {} ({:?})", io, role);
            return;
        }
        info!("SRMgr: io {} registered as {:?}", io, role);
    }

    fn last_release_ts(&self, io: u8) -> u32 {
        self.slot(io).map_or(0, |s| s.last_release_ms)
    }

    fn last_press_ts(&self, io: u8) -> u32 {
        self.slot(io).map_or(0, |s| s.last_press_ms)
    }

    fn last_press_type(&self, io: u8) -> PressType {
        self.slot(io).map_or(PressType::Unknown, |s| s.last_press_type)
    }
}

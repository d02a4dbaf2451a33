//! Mock collaborators for integration tests.
//!
//! Record every call the cage module makes so tests can assert on the full
//! history without a real Event Source, clock or host framework.

use std::cell::Cell;
use std::collections::HashMap;

use cagemon::app::events::{InputRole, PressType};
use cagemon::app::ports::{
    ButtonSource, ModuleApi, ModuleDescriptor, ModuleId, TimeSource, UplinkScheduler,
};
use cagemon::error::RegistryError;

// ── MockButtons ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct InputRecord {
    pub press_ms: u32,
    pub release_ms: u32,
    pub press_type: PressType,
}

#[derive(Default)]
pub struct MockButtons {
    pub registrations: Vec<(u8, InputRole)>,
    pub records: HashMap<u8, InputRecord>,
}

#[allow(dead_code)]
impl MockButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the Event Source recording a completed press on `io`.
    pub fn set_press(&mut self, io: u8, press_ms: u32, release_ms: u32, press_type: PressType) {
        self.records.insert(
            io,
            InputRecord {
                press_ms,
                release_ms,
                press_type,
            },
        );
    }
}

impl ButtonSource for MockButtons {
    fn register_button_cb(&mut self, io: u8, role: InputRole) {
        self.registrations.push((io, role));
    }

    fn last_release_ts(&self, io: u8) -> u32 {
        self.records.get(&io).map_or(0, |r| r.release_ms)
    }

    fn last_press_ts(&self, io: u8) -> u32 {
        self.records.get(&io).map_or(0, |r| r.press_ms)
    }

    fn last_press_type(&self, io: u8) -> PressType {
        self.records.get(&io).map_or(PressType::Unknown, |r| r.press_type)
    }
}

// ── MockClock ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MockClock {
    now_ms: Cell<u32>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn at(now_ms: u32) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now_ms.set(now_ms);
    }
}

impl TimeSource for MockClock {
    fn rel_time_ms(&self) -> u32 {
        self.now_ms.get()
    }
}

// ── MockCore ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MockCore {
    pub registered: Vec<ModuleDescriptor>,
    pub forced: Vec<ModuleId>,
    /// When set, `register_module` refuses with this error.
    pub refuse_with: Option<RegistryError>,
}

#[allow(dead_code)]
impl MockCore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UplinkScheduler for MockCore {
    fn register_module(&mut self, module: &dyn ModuleApi) -> Result<(), RegistryError> {
        if let Some(e) = self.refuse_with {
            return Err(e);
        }
        self.registered.push(module.descriptor());
        Ok(())
    }

    fn force_uplink(&mut self, id: ModuleId) {
        self.forced.push(id);
    }
}

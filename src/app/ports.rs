//! Port traits: the boundary between the cage module and its collaborators.
//!
//! ```text
//!   ButtonSource ──▶ ┌─────────────┐ ──▶ UplinkScheduler
//!   TimeSource   ──▶ │ CageModule  │
//!                    └─────────────┘ ◀── ModuleApi (host lifecycle)
//! ```
//!
//! The Event Source, the clock and the host framework implement the driven
//! ports; [`CageModule`](crate::cage::CageModule) consumes them through
//! generics at each call site, so it never touches hardware directly.
//! [`ModuleApi`] is the other direction: the fixed method set the host
//! framework calls on every registered module.

use crate::app::events::{InputRole, PressType};
use crate::error::RegistryError;

// ───────────────────────────────────────────────────────────────
// Event Source port (debounced inputs → module)
// ───────────────────────────────────────────────────────────────

/// Debounced button/contact inputs and their timestamp store.
pub trait ButtonSource {
    /// Route future state changes on input `io` to the handler for `role`.
    fn register_button_cb(&mut self, io: u8, role: InputRole);

    /// Relative time (ms) of the last release recorded on `io`.
    fn last_release_ts(&self, io: u8) -> u32;

    /// Relative time (ms) of the last press recorded on `io`.
    fn last_press_ts(&self, io: u8) -> u32;

    /// Classification of the last completed press on `io`.
    fn last_press_type(&self, io: u8) -> PressType;
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic time since boot.
pub trait TimeSource {
    /// Milliseconds since boot.  Never goes backwards.
    fn rel_time_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Host framework port (module → host)
// ───────────────────────────────────────────────────────────────

/// Identifier of a module slot in the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(pub u8);

impl ModuleId {
    /// Slot consulted for presence/trigger-input (PTI) data.
    pub const PTI: ModuleId = ModuleId(4);
}

/// Whether the host may run a module's check cycle alongside others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    Serial,
    Parallel,
}

/// What a module declares about itself at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: &'static str,
    pub id: ModuleId,
    pub exec: ExecMode,
}

/// Scheduling and reporting services the host framework offers modules.
pub trait UplinkScheduler {
    /// Add `module` to the host's registry.
    fn register_module(&mut self, module: &dyn ModuleApi) -> Result<(), RegistryError>;

    /// Request an immediate uplink for which only `id` needs consulting.
    fn force_uplink(&mut self, id: ModuleId);
}

// ───────────────────────────────────────────────────────────────
// Module lifecycle API (host → module)
// ───────────────────────────────────────────────────────────────

/// Largest uplink payload the host assembles (LoRaWAN DR0 at EU868).
pub const UL_MAX_PAYLOAD: usize = 51;

/// Uplink payload under construction, shared by every consulted module.
#[derive(Debug, Default)]
pub struct UplinkBuffer {
    payload: heapless::Vec<u8, UL_MAX_PAYLOAD>,
}

impl UplinkBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `bytes`; returns `false` (and writes nothing) if they don't fit.
    pub fn append(&mut self, bytes: &[u8]) -> bool {
        self.payload.extend_from_slice(bytes).is_ok()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn clear(&mut self) {
        self.payload.clear();
    }
}

/// The fixed lifecycle contract every host-registered module implements.
///
/// The host never calls these concurrently for the same module.
pub trait ModuleApi {
    /// Name, id and execution mode used at registration.
    fn descriptor(&self) -> ModuleDescriptor;

    /// Begin a check cycle.  Returns how long (ms) the module wants before
    /// the host collects its data.
    fn start(&mut self) -> u32;

    /// End the check cycle.
    fn stop(&mut self);

    /// Put owned peripherals into low-power mode.
    fn off(&mut self);

    /// Fully power down owned peripherals before deep sleep.
    fn deepsleep(&mut self);

    /// Contribute to the uplink.  Returns `true` if the module has data
    /// that justifies sending it.
    fn get_ul_data(&mut self, ul: &mut UplinkBuffer) -> bool;

    /// Whether the host should call [`tick`](Self::tick) periodically.
    fn wants_tick(&self) -> bool {
        false
    }

    /// Periodic tick, only called when [`wants_tick`](Self::wants_tick) is set.
    fn tick(&mut self) {}
}

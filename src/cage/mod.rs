//! Cage door and test button module.
//!
//! Watches two debounced inputs (a user test button and a door reed
//! contact), remembers when each last changed, and asks the host for an
//! immediate, cage-only uplink whenever something worth reporting happens.
//!
//! ```text
//!  ButtonSource ──▶ handlers ──▶ CageContext
//!                      │
//!                      └──▶ UplinkScheduler::force_uplink(PTI)
//!
//!  host ──▶ ModuleApi (start / stop / off / deepsleep / get_ul_data)
//! ```
//!
//! The module owns its [`CageContext`]; collaborators are passed in at each
//! call, never stored.

mod context;
mod handlers;

pub use context::CageContext;

use log::{debug, info, warn};

use crate::app::events::InputRole;
use crate::app::ports::{
    ButtonSource, ExecMode, ModuleApi, ModuleDescriptor, ModuleId, UplinkBuffer, UplinkScheduler,
};
use crate::config::CageConfig;

/// Delay requested from the host between `start` and data collection.
pub const CHECK_DURATION_MS: u32 = 1000;

const DESCRIPTOR: ModuleDescriptor = ModuleDescriptor {
    name: "CAGE",
    id: ModuleId::PTI,
    exec: ExecMode::Parallel,
};

pub struct CageModule {
    config: CageConfig,
    ctx: CageContext,
}

impl CageModule {
    /// Build the module without registering it anywhere.
    pub fn new(config: CageConfig) -> Self {
        Self {
            config,
            ctx: CageContext::default(),
        }
    }

    /// Build the module, register it with the host, and hook the fitted inputs.
    ///
    /// Unfitted inputs (negative index) are skipped silently.  A refused
    /// host registration is logged; the input callbacks are still wired so
    /// timestamps keep being tracked.
    pub fn init(
        config: CageConfig,
        core: &mut impl UplinkScheduler,
        buttons: &mut impl ButtonSource,
    ) -> Self {
        let module = Self::new(config);

        if let Err(e) = core.register_module(&module) {
            warn!("CAGE: host registration failed: {}", e);
        }

        if let Some(io) = config.button() {
            buttons.register_button_cb(io, InputRole::UserButton);
        }
        if let Some(io) = config.door() {
            buttons.register_button_cb(io, InputRole::DoorContact);
        }

        module
    }

    pub fn context(&self) -> &CageContext {
        &self.ctx
    }

    pub fn config(&self) -> &CageConfig {
        &self.config
    }
}

impl ModuleApi for CageModule {
    fn descriptor(&self) -> ModuleDescriptor {
        DESCRIPTOR
    }

    fn start(&mut self) -> u32 {
        debug!("CAGE: start cage check for {} ms", CHECK_DURATION_MS);
        CHECK_DURATION_MS
    }

    fn stop(&mut self) {
        debug!("CAGE: done");
    }

    // Both inputs are powered and debounced by the Event Source; the module
    // owns no peripheral to switch off.
    fn off(&mut self) {}

    fn deepsleep(&mut self) {}

    fn get_ul_data(&mut self, _ul: &mut UplinkBuffer) -> bool {
        info!(
            "CAGE: UL last button @{}, opened @{}, closed @{}",
            self.ctx.last_button_release_ms,
            self.ctx.last_door_opened_ms,
            self.ctx.last_door_closed_ms
        );
        // No uplink encoding exists for the cage timestamps or current input
        // states, so nothing is written and the module never claims the
        // uplink as its own.
        false
    }
}

//! Host module registry and uplink collector.
//!
//! The minimal host side of the [`ModuleApi`] contract: modules register a
//! descriptor at init, ask for forced uplinks from their input handlers,
//! and get consulted by [`AppCore::collect`] when the main loop decides an
//! uplink is due.
//!
//! ```text
//!  ┌───────────────┐  force_uplink(id)  ┌───────────────┐
//!  │ input handler │──────────────────▶│    AppCore    │
//!  └───────────────┘                    │  slots · forced│
//!                                       └───────┬───────┘
//!                     collect(modules, ul)      │
//!                  start ─▶ get_ul_data ─▶ stop ▼
//!                                       registered modules
//! ```
//!
//! Modules are passed in by reference on every cycle rather than stored,
//! so their input handlers stay free to borrow them in between.

use log::{debug, info, warn};

use crate::app::ports::{ModuleApi, ModuleDescriptor, ModuleId, UplinkBuffer, UplinkScheduler};
use crate::error::RegistryError;

/// Maximum number of registered modules (stack-allocated).
pub const MAX_MODULES: usize = 8;

/// Outcome of one collection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    /// Modules whose lifecycle was run.
    pub consulted: usize,
    /// Longest check duration any consulted module asked for.
    pub max_delay_ms: u32,
    /// At least one module said its data justifies the uplink.
    pub has_data: bool,
    /// The cycle was restricted to modules that forced it.
    pub forced: bool,
}

pub struct AppCore {
    slots: heapless::Vec<ModuleDescriptor, MAX_MODULES>,
    /// Modules that asked for an immediate, module-only uplink.
    forced: heapless::Vec<ModuleId, MAX_MODULES>,
}

impl Default for AppCore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppCore {
    pub fn new() -> Self {
        Self {
            slots: heapless::Vec::new(),
            forced: heapless::Vec::new(),
        }
    }

    /// Whether any module is waiting for a forced uplink.
    pub fn uplink_pending(&self) -> bool {
        !self.forced.is_empty()
    }

    /// Modules currently waiting for a forced uplink.
    pub fn forced(&self) -> &[ModuleId] {
        &self.forced
    }

    pub fn is_registered(&self, id: ModuleId) -> bool {
        self.descriptor(id).is_some()
    }

    pub fn descriptor(&self, id: ModuleId) -> Option<&ModuleDescriptor> {
        self.slots.iter().find(|d| d.id == id)
    }

    /// Run one collection cycle.
    ///
    /// With forced requests pending only the requesting modules are
    /// consulted (and the requests are consumed); otherwise every
    /// registered module in `modules` is.  Unregistered modules are skipped.
    pub fn collect(
        &mut self,
        modules: &mut [&mut dyn ModuleApi],
        ul: &mut UplinkBuffer,
    ) -> CycleReport {
        let forced = self.uplink_pending();
        let mut report = CycleReport {
            forced,
            ..CycleReport::default()
        };
        ul.clear();

        for module in modules.iter_mut() {
            let desc = module.descriptor();
            if !self.is_registered(desc.id) {
                warn!("AppCore: module '{}' not registered, skipped", desc.name);
                continue;
            }
            if forced && !self.forced.contains(&desc.id) {
                continue;
            }

            let delay_ms = module.start();
            report.max_delay_ms = report.max_delay_ms.max(delay_ms);
            if module.get_ul_data(ul) {
                report.has_data = true;
            }
            module.stop();
            report.consulted += 1;
            debug!("AppCore: consulted '{}' (check {} ms)", desc.name, delay_ms);
        }

        self.forced.clear();
        report
    }

    /// Tick every registered module that asked for periodic ticks.
    pub fn tick(&self, modules: &mut [&mut dyn ModuleApi]) {
        for module in modules.iter_mut() {
            if module.wants_tick() && self.is_registered(module.descriptor().id) {
                module.tick();
            }
        }
    }

    /// Put every module's peripherals into low-power mode.
    pub fn off(&self, modules: &mut [&mut dyn ModuleApi]) {
        for module in modules.iter_mut() {
            module.off();
        }
    }

    /// Fully power down every module's peripherals before deep sleep.
    pub fn deepsleep(&self, modules: &mut [&mut dyn ModuleApi]) {
        for module in modules.iter_mut() {
            module.deepsleep();
        }
    }
}

impl UplinkScheduler for AppCore {
    fn register_module(&mut self, module: &dyn ModuleApi) -> Result<(), RegistryError> {
        let desc = module.descriptor();
        if self.is_registered(desc.id) {
            return Err(RegistryError::Duplicate(desc.id));
        }
        self.slots.push(desc).map_err(|_| RegistryError::Full)?;
        info!(
            "AppCore: registered '{}' as module {} ({:?})",
            desc.name, desc.id.0, desc.exec
        );
        Ok(())
    }

    fn force_uplink(&mut self, id: ModuleId) {
        if self.forced.contains(&id) {
            return;
        }
        // `forced` has one entry per slot, so it can't overflow for a
        // registered id; unregistered ids are dropped.
        if !self.is_registered(id) || self.forced.push(id).is_err() {
            warn!(
                "AppCore: forced uplink from unknown module {} dropped",
                id.0
            );
            return;
        }
        debug!("AppCore: forced uplink requested by module {}", id.0);
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════

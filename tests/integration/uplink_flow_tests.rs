//! Full pipeline: raw samples → SensorManager → CageModule → AppCore.
//!
//! Uses the real Event Source and host registry; only the clock is mocked.

use super::mock_hw::MockClock;

use cagemon::app::events::{ButtonState, InputChange};
use cagemon::app::ports::{ModuleApi, ModuleId, UplinkBuffer};
use cagemon::appcore::AppCore;
use cagemon::cage::CageModule;
use cagemon::config::CageConfig;
use cagemon::sensors::input::DEBOUNCE_MS;
use cagemon::sensors::SensorManager;

const BUTTON: u8 = 16;
const DOOR: u8 = 10;

struct Rig {
    cage: CageModule,
    sensors: SensorManager,
    core: AppCore,
    clock: MockClock,
}

impl Rig {
    fn new() -> Self {
        let mut sensors = SensorManager::new();
        let mut core = AppCore::new();
        let config = CageConfig {
            button_io: BUTTON as i8,
            door_io: DOOR as i8,
        };
        let cage = CageModule::init(config, &mut core, &mut sensors);
        Self {
            cage,
            sensors,
            core,
            clock: MockClock::default(),
        }
    }

    /// Hold `pressed` on `io` from `at_ms` until the debounce accepts it.
    fn drive(&mut self, io: u8, pressed: bool, at_ms: u32) -> InputChange {
        assert!(self.sensors.sample(io, pressed, at_ms).is_none());
        let accepted_ms = at_ms + DEBOUNCE_MS;
        self.clock.set(accepted_ms);
        let change = self
            .sensors
            .sample(io, pressed, accepted_ms)
            .expect("debounced edge");
        self.cage
            .handle_input(change, &self.sensors, &self.clock, &mut self.core);
        change
    }

    fn collect(&mut self) -> (cagemon::appcore::CycleReport, UplinkBuffer) {
        let mut ul = UplinkBuffer::new();
        let mut modules: [&mut dyn ModuleApi; 1] = [&mut self.cage];
        let report = self.core.collect(&mut modules, &mut ul);
        (report, ul)
    }
}

#[test]
fn init_registers_with_real_collaborators() {
    let rig = Rig::new();
    assert!(rig.core.is_registered(ModuleId::PTI));
    assert_eq!(rig.sensors.registered_count(), 2);
}

#[test]
fn button_release_forces_cage_only_uplink() {
    let mut rig = Rig::new();

    let press = rig.drive(BUTTON, true, 1000);
    assert_eq!(press.state, ButtonState::Pressed);
    assert!(!rig.core.uplink_pending(), "press must not force an uplink");

    let release = rig.drive(BUTTON, false, 1300);
    assert_eq!(release.state, ButtonState::Released);
    // Stamp is the edge time recorded by the Event Source, not the
    // (later) moment the debounce accepted it.
    assert_eq!(rig.cage.context().last_button_release_ms(), 1300);
    assert_eq!(rig.core.forced(), &[ModuleId::PTI]);

    let (report, ul) = rig.collect();
    assert!(report.forced);
    assert_eq!(report.consulted, 1);
    assert_eq!(report.max_delay_ms, 1000);
    assert!(!report.has_data);
    assert!(ul.is_empty());
    assert!(!rig.core.uplink_pending());
}

#[test]
fn door_cycle_stamps_with_clock_at_handling() {
    let mut rig = Rig::new();

    rig.drive(DOOR, true, 200); // contact made: closed
    assert_eq!(rig.cage.context().last_door_closed_ms(), 200 + DEBOUNCE_MS);

    rig.drive(DOOR, false, 900); // contact released: opened
    assert_eq!(rig.cage.context().last_door_opened_ms(), 900 + DEBOUNCE_MS);
    assert_eq!(rig.cage.context().last_door_closed_ms(), 200 + DEBOUNCE_MS);

    // Both requests coalesce into one pending cage uplink.
    assert_eq!(rig.core.forced(), &[ModuleId::PTI]);
}

#[test]
fn periodic_cycle_consults_cage() {
    let mut rig = Rig::new();
    let (report, _) = rig.collect();
    assert!(!report.forced);
    assert_eq!(report.consulted, 1);
    assert!(!report.has_data);
}

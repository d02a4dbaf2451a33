//! Handler diagnostics stay on the no-output level.
//!
//! The button shares its line with the debug UART, so every record the
//! handlers emit must carry [`NOOUT_TARGET`] to be muted by the log sink.

use std::sync::{Mutex, Once};
use std::thread::{self, ThreadId};

use log::{Level, LevelFilter, Log, Metadata, Record};

use super::mock_hw::{MockButtons, MockClock, MockCore};

use cagemon::app::events::{ButtonState, InputChange, InputRole, PressType};
use cagemon::cage::CageModule;
use cagemon::config::CageConfig;
use cagemon::logging::NOOUT_TARGET;

const BUTTON: u8 = 16;
const DOOR: u8 = 10;

/// Process-wide capture; each test only looks at its own thread's records.
struct Capture {
    records: Mutex<Vec<(ThreadId, String, Level)>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }
    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            thread::current().id(),
            record.target().to_owned(),
            record.level(),
        ));
    }
    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger in this binary");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Drain and return this thread's `(target, level)` records.
fn take_own() -> Vec<(String, Level)> {
    let me = thread::current().id();
    let mut all = CAPTURE.records.lock().unwrap();
    let (mine, rest): (Vec<_>, Vec<_>) = all.drain(..).partition(|(id, _, _)| *id == me);
    *all = rest;
    mine.into_iter().map(|(_, t, l)| (t, l)).collect()
}

fn change(io: u8, role: InputRole, state: ButtonState) -> InputChange {
    InputChange {
        io,
        role,
        state,
        press_type: PressType::Unknown,
    }
}

fn assert_all_noout(records: &[(String, Level)]) {
    for (target, level) in records {
        assert_eq!(target, NOOUT_TARGET, "handler logged on '{target}'");
        assert_eq!(*level, Level::Debug);
    }
}

#[test]
fn every_handler_transition_logs_on_noout() {
    install();

    let mut buttons = MockButtons::new();
    let mut core = MockCore::new();
    let clock = MockClock::default();
    let config = CageConfig {
        button_io: BUTTON as i8,
        door_io: DOOR as i8,
    };
    let mut cage = CageModule::init(config, &mut core, &mut buttons);
    take_own();

    buttons.set_press(BUTTON, 100, 180, PressType::Short);
    clock.set(200);
    for input in [
        change(BUTTON, InputRole::UserButton, ButtonState::Pressed),
        change(BUTTON, InputRole::UserButton, ButtonState::Released),
        change(DOOR, InputRole::DoorContact, ButtonState::Released),
        change(DOOR, InputRole::DoorContact, ButtonState::Pressed),
    ] {
        cage.handle_input(input, &buttons, &clock, &mut core);
        let records = take_own();
        assert!(!records.is_empty(), "{:?} logged nothing", input);
        assert_all_noout(&records);
    }
}

#[test]
fn direct_handler_calls_log_on_noout() {
    install();

    let mut buttons = MockButtons::new();
    let mut core = MockCore::new();
    let clock = MockClock::default();
    let mut cage = CageModule::new(CageConfig {
        button_io: BUTTON as i8,
        door_io: DOOR as i8,
    });
    buttons.set_press(BUTTON, 0, 5000, PressType::Long);
    take_own();

    cage.on_button_change(ButtonState::Released, PressType::Long, &buttons, &mut core);
    cage.on_door_change(ButtonState::Pressed, PressType::Unknown, &clock, &mut core);

    let records = take_own();
    assert_eq!(records.len(), 2);
    assert_all_noout(&records);
}

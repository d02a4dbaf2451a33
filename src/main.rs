//! Cage monitor firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  GPIO (button, door reed)                                    │
//! │        │ sampled every SAMPLE_PERIOD_MS                      │
//! │        ▼                                                     │
//! │  SensorManager ── InputChange ──▶ CageModule handlers        │
//! │  (debounce, timestamps)              │                       │
//! │                                      ▼ force_uplink(PTI)     │
//! │  AppCore ◀───────────────────────────┘                       │
//! │     │ forced request or UPLINK_PERIOD_MS elapsed             │
//! │     ▼                                                        │
//! │  collect(start → get_ul_data → stop) ──▶ uplink buffer       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver, Pull};
use esp_idf_svc::log::EspLogger;
use log::{info, warn};

use cagemon::adapters::log_sink::SharedLineFilter;
use cagemon::adapters::time::MonotonicClock;
use cagemon::app::ports::{ModuleApi, TimeSource, UplinkBuffer};
use cagemon::appcore::AppCore;
use cagemon::cage::CageModule;
use cagemon::config::CageConfig;
use cagemon::sensors::SensorManager;

/// Raw input sampling period.
const SAMPLE_PERIOD_MS: u32 = 10;
/// Periodic uplink interval when nothing forces one.
const UPLINK_PERIOD_MS: u32 = 60 * 60 * 1000;

/// `set_pull` is only available on IO-capable pins.
type InputDriver = PinDriver<'static, AnyIOPin, Input>;

fn input_pin(io: u8) -> Result<InputDriver> {
    // SAFETY: `io` comes from the board pin map and each index is claimed once.
    let pin = unsafe { AnyIOPin::new(i32::from(io)) };
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    log::set_logger(Box::leak(Box::new(SharedLineFilter::new(EspLogger::new()))))
        .map_err(|e| anyhow::anyhow!("logger init: {e}"))?;
    log::set_max_level(log::LevelFilter::Debug);

    info!("Cage monitor v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Board configuration ────────────────────────────────
    let config = CageConfig::default();
    config.validate()?;

    // ── 3. Collaborators + module ─────────────────────────────
    let clock = MonotonicClock::new();
    let mut core = AppCore::new();
    let mut sensors = SensorManager::new();
    let mut cage = CageModule::init(config, &mut core, &mut sensors);

    let mut inputs: heapless::Vec<(u8, InputDriver), 2> = heapless::Vec::new();
    for io in [config.button(), config.door()].into_iter().flatten() {
        if inputs.push((io, input_pin(io)?)).is_err() {
            warn!("Input table full, io {} not sampled", io);
        }
    }

    info!("System ready. Entering event loop.");

    // ── 4. Event loop ─────────────────────────────────────────
    let mut ul = UplinkBuffer::new();
    let mut last_uplink_ms = clock.rel_time_ms();

    loop {
        let now_ms = clock.rel_time_ms();

        for (io, pin) in &mut inputs {
            match sensors.poll(*io, pin, now_ms) {
                Ok(Some(change)) => cage.handle_input(change, &sensors, &clock, &mut core),
                Ok(None) => {}
                Err(e) => warn!("io {} read failed: {:?}", io, e),
            }
        }

        if core.uplink_pending() || now_ms.wrapping_sub(last_uplink_ms) >= UPLINK_PERIOD_MS {
            let mut modules: [&mut dyn ModuleApi; 1] = [&mut cage];
            let report = core.collect(&mut modules, &mut ul);
            info!(
                "Uplink cycle: forced={} consulted={} data={} payload={}B",
                report.forced,
                report.consulted,
                report.has_data,
                ul.len()
            );
            last_uplink_ms = now_ms;
        }

        esp_idf_hal::delay::FreeRtos::delay_ms(SAMPLE_PERIOD_MS);
    }
}

//! Adapters: concrete implementations of the port traits and platform glue.
//!
//! | Adapter    | Implements   | Connects to                      |
//! |------------|--------------|----------------------------------|
//! | `log_sink` | `log::Log`   | ESP-IDF logger (shared UART)     |
//! | `time`     | TimeSource   | ESP32 system timer               |
//!
//! The Event Source ([`SensorManager`](crate::sensors::SensorManager)) and
//! the host registry ([`AppCore`](crate::appcore::AppCore)) live in their
//! own modules.

pub mod log_sink;
pub mod time;

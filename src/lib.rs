//! Cage monitor firmware library.
//!
//! Exposes the cage door / test button module and the collaborators it is
//! composed with, for integration testing on the host.  All ESP-IDF-specific
//! code is guarded by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod appcore;
pub mod cage;
pub mod config;
pub mod error;
pub mod logging;
pub mod pins;
pub mod sensors;

pub mod adapters;

//! Shared-line log filter.
//!
//! Wraps the platform logger (the ESP-IDF logger in production) and drops
//! every record on the [`NOOUT_TARGET`] while the debug UART shares its
//! line with the user button.  Everything else passes straight through.

use core::sync::atomic::{AtomicBool, Ordering};

use log::{Log, Metadata, Record};

use crate::logging::NOOUT_TARGET;

pub struct SharedLineFilter<L> {
    inner: L,
    /// `true` while the debug UART line doubles as the button input.
    muted: AtomicBool,
}

impl<L: Log> SharedLineFilter<L> {
    /// Wrap `inner`, starting muted.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            muted: AtomicBool::new(true),
        }
    }

    /// Let no-output records through (e.g. on a bench board with a
    /// separate debug header).
    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }
}

impl<L: Log> Log for SharedLineFilter<L> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.target() == NOOUT_TARGET && self.is_muted() {
            return false;
        }
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

//! Diagnostic log levels specific to this board.
//!
//! The user button shares its GPIO with the debug UART RX line, so anything
//! logged while the button or door contact is being handled must go through
//! the "no-output" level: records on [`NOOUT_TARGET`], which the
//! [`SharedLineFilter`](crate::adapters::log_sink::SharedLineFilter) drops
//! while the line is muted.

/// `log` target reserved for messages that must not hit the shared UART.
pub const NOOUT_TARGET: &str = "noout";

/// Log at the no-output level.  Use this, not `debug!`, from input handlers.
#[macro_export]
macro_rules! log_noout {
    ($($arg:tt)+) => {
        ::log::debug!(target: $crate::logging::NOOUT_TARGET, $($arg)+)
    };
}

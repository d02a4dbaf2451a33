//! Input assignments for the cage tracker board.
//!
//! Single source of truth for which GPIO each monitored input is wired to.
//! A negative index means the input is not fitted on this board variant;
//! the cage module then skips registering a callback for it.

// ---------------------------------------------------------------------------
// User test button (active-low, shares its line with the debug UART RX)
// ---------------------------------------------------------------------------

/// Momentary push-button used to trigger a test uplink.
pub const BUTTON_IO: i8 = 16;

// ---------------------------------------------------------------------------
// Door contact (reed switch on the external I/O connector)
// ---------------------------------------------------------------------------

/// Reed switch on the cage door. Contact made (LOW) = door closed.
pub const DOOR_IO: i8 = 10;

/// Sentinel for "input not fitted".
pub const NOT_FITTED: i8 = -1;

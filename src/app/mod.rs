//! Application boundary: input notifications and port traits.
//!
//! Everything the cage module exchanges with the outside world is defined
//! here: the debounced input events it receives ([`events`]) and the
//! traits its collaborators implement ([`ports`]).

pub mod events;
pub mod ports;

//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the cage module against
//! mock collaborators.  All tests run on the host (x86_64) with no real
//! hardware required.

mod log_level_tests;
mod mock_hw;
mod uplink_flow_tests;

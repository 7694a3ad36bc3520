//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  All tests run on the host with no renderer
//! and no Bluetooth radio.

mod link_flow_tests;
mod mock_ports;
mod service_tests;

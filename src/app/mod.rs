//! Application core: pure viewer logic, zero I/O.
//!
//! The velocity ramp, the pressed-signal sampling and the HUD are driven
//! from here.  All interaction with the renderer, the Bluetooth stack
//! and storage happens through **port traits** defined in [`ports`].

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;

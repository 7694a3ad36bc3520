//! SpinView library.
//!
//! Core of a viewer that spins a model while a wireless button is held.
//! The velocity ramp, input plumbing and link lifecycle live here; the
//! renderer and the platform Bluetooth stack plug in through the port
//! traits in [`app::ports`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod hud;
pub mod input;
pub mod scene;

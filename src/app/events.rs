//! Outbound application events.
//!
//! The [`ViewerService`](super::service::ViewerService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters decide what to
//! do with them.

use crate::control::ramp::RampMode;
use crate::hud::HudStatus;

/// Structured events emitted by the viewer core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the initial ramp velocity).
    Started { velocity: f64 },

    /// The ramp changed direction because the pressed signal flipped.
    ModeChanged { from: RampMode, to: RampMode },

    /// Periodic status snapshot.
    Telemetry(HudStatus),
}

//! Inbound commands.
//!
//! Produced by the UI layer (keyboard, on-screen button) or, in the host
//! binary, by the stdin reader that stands in for it.

use crate::input::Payload;

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// A key went down (`KeyboardEvent.code`, e.g. `"Space"`).
    KeyDown(String),

    /// A key was released.
    KeyUp(String),

    /// The connect/disconnect button was clicked.
    ToggleLink,

    /// Simulated peripheral: notify a characteristic value.
    PeripheralNotify(Payload),

    /// Simulated peripheral: drop the connection from the device side.
    PeripheralDisconnect,

    /// Leave the frame loop.
    Quit,
}

//! On-screen status text.

use core::fmt::Write;

/// Capacity of the rendered HUD line.
pub const HUD_LINE_CAP: usize = 64;

pub const CONNECT_LABEL: &str = "connect BLE";
pub const DISCONNECT_LABEL: &str = "disconnect BLE";

/// Snapshot shown in the HUD and emitted as telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStatus {
    pub connected: bool,
    pub pressed: bool,
    pub velocity: f64,
    pub angle: f64,
    pub frame: u64,
}

impl HudStatus {
    /// `BLE: connected | pressed=true`
    pub fn line(&self) -> heapless::String<HUD_LINE_CAP> {
        let mut s = heapless::String::new();
        // Longest line is 38 bytes, well under capacity.
        let _ = write!(
            s,
            "BLE: {} | pressed={}",
            if self.connected {
                "connected"
            } else {
                "disconnected"
            },
            self.pressed,
        );
        s
    }
}

/// Label for the link toggle button.
pub fn link_button_label(connected: bool) -> &'static str {
    if connected {
        DISCONNECT_LABEL
    } else {
        CONNECT_LABEL
    }
}

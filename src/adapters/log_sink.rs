//! Log-based event sink and renderer adapters.
//!
//! [`LogEventSink`] writes structured application events through the
//! `log` facade.  [`LogRenderer`] stands in for the 3D engine on the
//! host: it traces every pose and logs the HUD line when it changes.

use log::{info, trace};

use crate::app::events::AppEvent;
use crate::app::ports::{EventSink, RenderPort};
use crate::hud::HUD_LINE_CAP;
use crate::scene::ModelPose;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | frame={} | link={} | pressed={} | vel={:.4} rad/f | angle={:.2} rad",
                    t.frame,
                    if t.connected { "UP" } else { "DOWN" },
                    t.pressed,
                    t.velocity,
                    t.angle,
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("RAMP  | {:?} -> {:?}", from, to);
            }
            AppEvent::Started { velocity } => {
                info!("START | velocity={:.4}", velocity);
            }
        }
    }
}

/// Host renderer: no drawing, just logs.
pub struct LogRenderer {
    last_hud: heapless::String<HUD_LINE_CAP>,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self {
            last_hud: heapless::String::new(),
            frames: 0,
        }
    }

    /// Poses drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_hud(&self) -> &str {
        self.last_hud.as_str()
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPort for LogRenderer {
    fn draw_model(&mut self, pose: &ModelPose) {
        self.frames += 1;
        trace!(
            "DRAW  | x={:.1} lean={:.3} rot_y={:.4} scale={:.2}",
            pose.offset_x, pose.lean_z, pose.rot_y, pose.scale
        );
    }

    fn draw_hud(&mut self, line: &str) {
        if self.last_hud.as_str() == line {
            return;
        }
        info!("HUD   | {}", line);
        self.last_hud.clear();
        // Lines longer than the buffer only lose their tail.
        for ch in line.chars() {
            if self.last_hud.push(ch).is_err() {
                break;
            }
        }
    }
}

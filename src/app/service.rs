//! Viewer service: the hexagonal core.
//!
//! [`ViewerService`] owns the velocity ramp and the read halves of the
//! pressed and connected cells.  Once per frame it samples the pressed
//! signal, advances the ramp and hands the resulting pose and HUD line to
//! the renderer.
//!
//! ```text
//!  FlagReader (pressed)   ──▶ ┌────────────────────┐ ──▶ RenderPort
//!  FlagReader (connected) ──▶ │   ViewerService    │ ──▶ EventSink
//!                             │   VelocityRamp     │
//!                             └────────────────────┘
//! ```

use log::{debug, info};

use crate::config::ViewerConfig;
use crate::control::ramp::{RampMode, RampState, VelocityRamp};
use crate::hud::HudStatus;
use crate::input::{FlagReader, KeyboardFallback};
use crate::scene::{ModelPlacement, ModelPose};

use super::commands::AppCommand;
use super::events::AppEvent;
use super::ports::{EventSink, RenderPort};

// ───────────────────────────────────────────────────────────────
// ViewerService
// ───────────────────────────────────────────────────────────────

pub struct ViewerService {
    ramp: VelocityRamp,
    placement: ModelPlacement,
    pressed: FlagReader,
    connected: FlagReader,
    /// Pressed value sampled on the most recent frame.
    last_pressed: bool,
    hud_interval_frames: u32,
    frame_count: u64,
}

impl ViewerService {
    pub fn new(config: &ViewerConfig, pressed: FlagReader, connected: FlagReader) -> Self {
        Self {
            ramp: VelocityRamp::new(config.spin),
            placement: config.placement,
            pressed,
            connected,
            last_pressed: false,
            hud_interval_frames: config.hud_interval_frames.max(1),
            frame_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let velocity = self.ramp.state().velocity;
        sink.emit(&AppEvent::Started { velocity });
        info!("ViewerService started (velocity={:.4} rad/frame)", velocity);
    }

    // ── Per-frame orchestration ───────────────────────────────

    /// Run one frame: sample pressed → ramp → render.
    ///
    /// `pressed` is read exactly once so the whole frame sees one value.
    pub fn tick(&mut self, out: &mut impl RenderPort, sink: &mut impl EventSink) -> ModelPose {
        self.frame_count += 1;

        // 1. Sample input
        let pressed = self.pressed.sample();
        if pressed != self.last_pressed {
            let (from, to) = (
                RampMode::from_pressed(self.last_pressed),
                RampMode::from_pressed(pressed),
            );
            debug!("Ramp {:?} -> {:?} at frame {}", from, to, self.frame_count);
            sink.emit(&AppEvent::ModeChanged { from, to });
            self.last_pressed = pressed;
        }

        // 2. Advance the ramp
        let state = self.ramp.advance(pressed);

        // 3. Render
        let pose = self.placement.pose(state.angle);
        out.draw_model(&pose);
        let status = self.status_with(pressed, state);
        out.draw_hud(status.line().as_str());

        // 4. Periodic telemetry
        if self.frame_count % u64::from(self.hud_interval_frames) == 0 {
            sink.emit(&AppEvent::Telemetry(status));
        }

        pose
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply the commands the core owns.  Returns `false` for commands
    /// that must be routed elsewhere (link and peripheral commands).
    pub fn handle_command(&mut self, cmd: &AppCommand, keyboard: &mut KeyboardFallback) -> bool {
        match cmd {
            AppCommand::KeyDown(code) => {
                keyboard.on_key_down(code);
                true
            }
            AppCommand::KeyUp(code) => {
                keyboard.on_key_up(code);
                true
            }
            AppCommand::ToggleLink
            | AppCommand::PeripheralNotify(_)
            | AppCommand::PeripheralDisconnect
            | AppCommand::Quit => false,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// HUD snapshot from the latest cell values and ramp state.
    pub fn status(&self) -> HudStatus {
        self.status_with(self.pressed.sample(), self.ramp.state())
    }

    pub fn ramp_state(&self) -> RampState {
        self.ramp.state()
    }

    pub fn mode(&self) -> RampMode {
        self.ramp.mode()
    }

    /// Frames rendered since startup.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn status_with(&self, pressed: bool, state: RampState) -> HudStatus {
        HudStatus {
            connected: self.connected.sample(),
            pressed,
            velocity: state.velocity,
            angle: state.angle,
            frame: self.frame_count,
        }
    }
}

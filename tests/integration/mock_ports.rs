//! Mock output adapters for integration tests.
//!
//! Record every render call and event so tests can assert on the full
//! history without a real renderer.

use spinview::app::events::AppEvent;
use spinview::app::ports::{EventSink, RenderPort};
use spinview::scene::ModelPose;

// ── MockRenderer ──────────────────────────────────────────────

pub struct MockRenderer {
    pub poses: Vec<ModelPose>,
    pub hud: Vec<String>,
}

#[allow(dead_code)]
impl MockRenderer {
    pub fn new() -> Self {
        Self {
            poses: Vec::new(),
            hud: Vec::new(),
        }
    }

    pub fn last_angle(&self) -> Option<f64> {
        self.poses.last().map(|p| p.rot_y)
    }

    pub fn last_hud(&self) -> Option<&str> {
        self.hud.last().map(String::as_str)
    }
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPort for MockRenderer {
    fn draw_model(&mut self, pose: &ModelPose) {
        self.poses.push(*pose);
    }

    fn draw_hud(&mut self, line: &str) {
        self.hud.push(line.to_owned());
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn telemetry_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Telemetry(_)))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

//! Viewer configuration parameters
//!
//! All tunable parameters for the spin viewer.  Defaults reproduce the
//! reference behaviour; a JSON file may override them at startup.

use serde::{Deserialize, Serialize};

use crate::control::ramp::SpinLimits;
use crate::scene::ModelPlacement;

/// Core viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    // --- Spin ---
    /// Velocity ramp bounds and step sizes
    pub spin: SpinLimits,

    // --- Scene ---
    /// Where and how the model sits in the scene
    pub placement: ModelPlacement,

    // --- Timing ---
    /// Frame tick interval (milliseconds)
    pub frame_interval_ms: u32,
    /// Telemetry emission interval (frames)
    pub hud_interval_frames: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            spin: SpinLimits::default(),
            placement: ModelPlacement::default(),

            // Timing
            frame_interval_ms: 16,    // ~60 Hz
            hud_interval_frames: 120, // every ~2 s
        }
    }
}

impl ViewerConfig {
    /// Reject values that would break the ramp or the frame loop.
    pub fn validate(&self) -> Result<(), &'static str> {
        self.spin.validate()?;
        if self.frame_interval_ms == 0 {
            return Err("frame_interval_ms must be > 0");
        }
        if self.hud_interval_frames == 0 {
            return Err("hud_interval_frames must be > 0");
        }
        if !self.placement.scale.is_finite() || self.placement.scale == 0.0 {
            return Err("placement.scale must be finite and non-zero");
        }
        Ok(())
    }
}

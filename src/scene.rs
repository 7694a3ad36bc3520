//! Model placement in the scene.
//!
//! The renderer applies, in order: translate along X, lean about Z,
//! spin about Y by the ramp angle, then a uniform scale.  A negative
//! scale flips the mesh into its upright orientation.

use core::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Static placement of the model, fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelPlacement {
    /// Horizontal offset in scene units (negative = left).
    pub offset_x: f64,
    /// Lean about the Z axis in radians.
    pub lean_z: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for ModelPlacement {
    fn default() -> Self {
        Self {
            offset_x: -90.0,
            lean_z: -PI / 18.0, // ~10° to the left
            scale: -1.5,
        }
    }
}

impl ModelPlacement {
    pub fn pose(&self, angle: f64) -> ModelPose {
        ModelPose {
            offset_x: self.offset_x,
            lean_z: self.lean_z,
            rot_y: angle,
            scale: self.scale,
        }
    }
}

/// Everything the renderer needs to orient the model for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPose {
    pub offset_x: f64,
    pub lean_z: f64,
    pub rot_y: f64,
    pub scale: f64,
}

//! Velocity ramp for the model spin.
//!
//! Maps the pressed signal, sampled once per frame, to an angular
//! velocity and an accumulated rotation angle:
//!
//! | Mode           | Condition       | Velocity update                          |
//! |----------------|-----------------|------------------------------------------|
//! | Accelerating   | `pressed`       | `min(spin_max, velocity + accel_on)`     |
//! | Decelerating   | `!pressed`      | `max(spin_min, velocity - decel_off)`    |
//!
//! The angle is advanced by the *clamped* velocity.  There is no debounce
//! and no hysteresis: a one-frame flicker of the input flips the ramp
//! direction for that frame.

use serde::{Deserialize, Serialize};

/// Upper velocity bound (radians/frame).
pub const SPIN_MAX: f64 = 0.2;
/// Per-frame acceleration while pressed.
pub const ACCEL_ON: f64 = 0.0008;
/// Per-frame deceleration while released.
pub const DECEL_OFF: f64 = 0.0008;
/// Lower velocity bound. The spin never fully stops.
pub const SPIN_MIN: f64 = 0.008;

/// Ramp design parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinLimits {
    pub spin_max: f64,
    pub accel_on: f64,
    pub decel_off: f64,
    pub spin_min: f64,
}

impl Default for SpinLimits {
    fn default() -> Self {
        Self {
            spin_max: SPIN_MAX,
            accel_on: ACCEL_ON,
            decel_off: DECEL_OFF,
            spin_min: SPIN_MIN,
        }
    }
}

impl SpinLimits {
    /// Range check used by config validation.
    pub fn validate(&self) -> Result<(), &'static str> {
        let all_finite = [self.spin_max, self.accel_on, self.decel_off, self.spin_min]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err("spin limits must be finite");
        }
        if self.spin_min <= 0.0 {
            return Err("spin_min must be > 0");
        }
        if self.spin_max < self.spin_min {
            return Err("spin_max must be >= spin_min");
        }
        if self.accel_on <= 0.0 || self.decel_off <= 0.0 {
            return Err("accel_on and decel_off must be > 0");
        }
        Ok(())
    }
}

/// Ramp direction selected by the current pressed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampMode {
    Accelerating,
    Decelerating,
}

impl RampMode {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            Self::Accelerating
        } else {
            Self::Decelerating
        }
    }
}

/// Velocity and accumulated angle, both in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampState {
    pub velocity: f64,
    pub angle: f64,
}

impl RampState {
    /// Start state: at rest on the velocity floor, angle zero.
    pub fn initial(limits: &SpinLimits) -> Self {
        Self {
            velocity: limits.spin_min,
            angle: 0.0,
        }
    }
}

/// Advance the ramp by one frame.
pub fn advance(pressed: bool, state: RampState, limits: &SpinLimits) -> RampState {
    let velocity = match RampMode::from_pressed(pressed) {
        RampMode::Accelerating => limits.spin_max.min(state.velocity + limits.accel_on),
        RampMode::Decelerating => limits.spin_min.max(state.velocity - limits.decel_off),
    };
    RampState {
        velocity,
        angle: state.angle + velocity,
    }
}

/// Owns the ramp state across frames.
pub struct VelocityRamp {
    limits: SpinLimits,
    state: RampState,
    mode: RampMode,
}

impl VelocityRamp {
    pub fn new(limits: SpinLimits) -> Self {
        Self {
            state: RampState::initial(&limits),
            limits,
            mode: RampMode::Decelerating,
        }
    }

    /// Run one frame with the sampled pressed value.
    pub fn advance(&mut self, pressed: bool) -> RampState {
        self.mode = RampMode::from_pressed(pressed);
        self.state = advance(pressed, self.state, &self.limits);
        self.state
    }

    pub fn state(&self) -> RampState {
        self.state
    }

    /// Mode used on the most recent frame.
    pub fn mode(&self) -> RampMode {
        self.mode
    }

    pub fn limits(&self) -> &SpinLimits {
        &self.limits
    }

    /// Back to the floor velocity with the angle zeroed.
    pub fn reset(&mut self) {
        self.state = RampState::initial(&self.limits);
        self.mode = RampMode::Decelerating;
    }
}

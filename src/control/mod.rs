//! Motion control for the spinning model.

pub mod ramp;

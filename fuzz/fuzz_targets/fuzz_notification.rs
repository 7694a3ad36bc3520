//! Fuzz target: notification decoding feeding the velocity ramp
//!
//! Splits the input into notification payloads (first byte of each chunk
//! is its length), decodes them through the pressed cell and steps the
//! ramp once per payload.  Velocity must stay in bounds and the angle
//! must keep increasing.
//!
//! cargo fuzz run fuzz_notification

#![no_main]

use libfuzzer_sys::fuzz_target;
use spinview::control::ramp::{SpinLimits, VelocityRamp};
use spinview::input::{FlagCell, decode_notification, payload_from};

fuzz_target!(|data: &[u8]| {
    let limits = SpinLimits::default();
    let mut ramp = VelocityRamp::new(limits);
    let (writer, reader) = FlagCell::new(false);

    let mut rest = data;
    while let Some((&len, tail)) = rest.split_first() {
        let take = (len as usize).min(tail.len());
        let payload = payload_from(&tail[..take]);
        assert!(payload.len() <= 20, "payload exceeds characteristic size");
        if let Some(pressed) = decode_notification(&payload) {
            writer.set(pressed);
        }
        rest = &tail[take..];

        let before = ramp.state().angle;
        let state = ramp.advance(reader.sample());
        assert!(state.velocity >= limits.spin_min && state.velocity <= limits.spin_max);
        assert!(state.angle > before);
    }
});

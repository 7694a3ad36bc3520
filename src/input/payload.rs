//! Button characteristic payload decoding.
//!
//! The peripheral notifies a single byte: `1` while the button is held,
//! `0` when released.  Only exact equality to `1` counts as pressed.
//! Empty payloads carry no state and are dropped.

/// Byte value meaning "pressed".
pub const PRESSED_BYTE: u8 = 1;

/// Largest notification value that fits the default ATT MTU (23 - 3).
pub const MAX_PAYLOAD: usize = 20;

/// Owned notification value.
pub type Payload = heapless::Vec<u8, MAX_PAYLOAD>;

/// Copy `raw` into a [`Payload`], truncating anything past [`MAX_PAYLOAD`].
pub fn payload_from(raw: &[u8]) -> Payload {
    let n = raw.len().min(MAX_PAYLOAD);
    // Cannot fail: `n` is bounded by the capacity.
    Payload::from_slice(&raw[..n]).unwrap_or_default()
}

/// Decode a notification payload into a pressed value.
///
/// Returns `None` for an empty payload; the caller keeps its prior value.
/// Only the first byte is inspected.
pub fn decode_notification(payload: &[u8]) -> Option<bool> {
    payload.first().map(|&b| b == PRESSED_BYTE)
}

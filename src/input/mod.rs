//! Pressed-signal sources.
//!
//! ```text
//! ┌──────────────┐                 ┌───────────┐
//! │ BLE notify   │──▶ FlagWriter ─▶│           │
//! │ Keyboard     │──▶ FlagWriter ─▶│ FlagCell  │──▶ FlagReader ──▶ ViewerService
//! └──────────────┘                 └───────────┘   (once per frame)
//! ```
//!
//! Sources write whenever an event arrives; the service samples the
//! latest value on each frame tick.  There is no queue: last write wins.

pub mod cell;
pub mod keyboard;
pub mod payload;

pub use cell::{FlagCell, FlagReader, FlagWriter};
pub use keyboard::KeyboardFallback;
pub use payload::{Payload, decode_notification, payload_from};

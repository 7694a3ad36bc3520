//! Port traits: the hexagonal boundary between the viewer core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ViewerService / PeripheralLink
//! ```
//!
//! The rendering engine, the platform Bluetooth stack, event logging and
//! configuration storage all sit behind these traits, so the core runs
//! and tests without a browser, a GPU or a radio.

use crate::config::ViewerConfig;
use crate::error::LinkError;
use crate::input::Payload;
use crate::scene::ModelPose;

// ───────────────────────────────────────────────────────────────
// GATT client port (driving adapter: platform Bluetooth → link)
// ───────────────────────────────────────────────────────────────

/// Central-role GATT operations needed to reach the button characteristic.
///
/// Mirrors the platform's device-chooser flow: one device is selected per
/// connect attempt and the client keeps the selected device, service and
/// characteristic as internal state between calls.
pub trait GattClient {
    /// Whether the platform exposes Bluetooth at all.
    fn is_supported(&self) -> bool;

    /// Let the user pick a device advertising `service`.
    async fn request_device(&mut self, service: u128) -> Result<(), LinkError>;

    /// Connect to the selected device's GATT server.
    async fn connect(&mut self) -> Result<(), LinkError>;

    /// Resolve the primary service on the connected server.
    async fn primary_service(&mut self, service: u128) -> Result<(), LinkError>;

    /// Resolve a characteristic on the resolved service.
    async fn characteristic(&mut self, characteristic: u128) -> Result<(), LinkError>;

    /// Subscribe to value-changed notifications on the characteristic.
    async fn start_notifications(&mut self) -> Result<(), LinkError>;

    /// Read the characteristic's current value once.
    async fn read_value(&mut self) -> Result<Payload, LinkError>;

    /// Drop the GATT connection.  A disconnect event follows.
    fn disconnect(&mut self) -> Result<(), LinkError>;

    /// Whether the GATT server connection is currently up.
    fn is_connected(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Render port (driven adapter: core → rendering engine)
// ───────────────────────────────────────────────────────────────

/// Consumes the per-frame model orientation and HUD text.
pub trait RenderPort {
    fn draw_model(&mut self, pose: &ModelPose);

    fn draw_hud(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: core → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: core ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists viewer configuration.
///
/// Implementations MUST validate before persisting and reject invalid
/// values with [`ConfigError::ValidationFailed`] rather than clamping.
pub trait ConfigPort {
    /// Load configuration.  [`ConfigError::NotFound`] when none is stored.
    fn load(&self) -> Result<ViewerConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &ViewerConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// No config stored yet.
    NotFound,
    /// Stored config failed to deserialize.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}

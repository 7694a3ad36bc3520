//! Error types for the viewer.
//!
//! Link failures are terminal for the attempt that raised them: the link
//! adapter logs them and moves to its `Failed` state.  Nothing here ever
//! reaches the velocity ramp, which has no failure modes.  Configuration
//! errors live with the config port as [`ConfigError`](crate::app::ports::ConfigError).

use core::fmt;

// ---------------------------------------------------------------------------
// Peripheral link errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The platform has no Bluetooth capability.
    Unsupported,
    /// The user dismissed the device chooser or no device matched.
    NoDeviceSelected,
    /// GATT server connection failed.
    ConnectFailed,
    /// The button service is absent on the device.
    ServiceNotFound,
    /// The button characteristic is absent on the service.
    CharacteristicNotFound,
    /// Subscribing to notifications failed.
    NotifyFailed,
    /// A characteristic read failed.
    ReadFailed,
    /// The operation needs an established connection.
    NotConnected,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => write!(f, "Bluetooth not supported on this platform"),
            Self::NoDeviceSelected => write!(f, "no device selected"),
            Self::ConnectFailed => write!(f, "GATT connect failed"),
            Self::ServiceNotFound => write!(f, "button service not found"),
            Self::CharacteristicNotFound => write!(f, "button characteristic not found"),
            Self::NotifyFailed => write!(f, "start notifications failed"),
            Self::ReadFailed => write!(f, "characteristic read failed"),
            Self::NotConnected => write!(f, "not connected"),
        }
    }
}

impl std::error::Error for LinkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_error_displays_and_boxes() {
        assert_eq!(
            LinkError::Unsupported.to_string(),
            "Bluetooth not supported on this platform"
        );
        let boxed: Box<dyn std::error::Error> = Box::new(LinkError::NotifyFailed);
        assert_eq!(boxed.to_string(), "start notifications failed");
    }
}

//! Host-side GATT client simulation.
//!
//! Stands in for the platform Bluetooth stack in tests and in the host
//! binary.  The simulated peripheral advertises the button service and
//! characteristic; individual stages can be made to fail.

use std::sync::Arc;

use log::info;

use super::ble::{BUTTON_CHAR_UUID, LinkEvent, LinkEventQueue, SERVICE_UUID};
use crate::app::ports::GattClient;
use crate::error::LinkError;
use crate::input::{Payload, payload_from};

/// Connect-sequence stage at which the simulation can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimStage {
    RequestDevice,
    Connect,
    PrimaryService,
    Characteristic,
    StartNotifications,
    Read,
}

pub struct SimGattClient {
    events: Arc<LinkEventQueue>,
    supported: bool,
    fail_at: Option<SimStage>,
    /// Clear `fail_at` after it has fired once.
    fail_once: bool,
    value: Payload,
    device_selected: bool,
    connected: bool,
    service_resolved: bool,
    char_resolved: bool,
    notifying: bool,
}

impl SimGattClient {
    pub fn new(events: Arc<LinkEventQueue>) -> Self {
        Self {
            events,
            supported: true,
            fail_at: None,
            fail_once: false,
            value: payload_from(&[0]),
            device_selected: false,
            connected: false,
            service_resolved: false,
            char_resolved: false,
            notifying: false,
        }
    }

    /// Platform without Bluetooth.
    pub fn unsupported(mut self) -> Self {
        self.supported = false;
        self
    }

    pub fn failing_at(mut self, stage: SimStage) -> Self {
        self.fail_at = Some(stage);
        self
    }

    /// Fail at `stage` on the next attempt only.
    pub fn failing_once_at(mut self, stage: SimStage) -> Self {
        self.fail_at = Some(stage);
        self.fail_once = true;
        self
    }

    /// Characteristic value returned by the initial read.
    pub fn with_initial_value(mut self, raw: &[u8]) -> Self {
        self.value = payload_from(raw);
        self
    }

    // ── Peripheral side ───────────────────────────────────────

    /// Notify a new value.  Delivered only while subscribed.
    pub fn notify(&self, raw: &[u8]) -> bool {
        if !(self.connected && self.notifying) {
            return false;
        }
        self.events.push(LinkEvent::Notification(payload_from(raw)))
    }

    /// Peripheral-initiated disconnect (power loss, out of range).
    pub fn drop_connection(&mut self) {
        if self.connected {
            self.reset_session();
            info!("BLE(sim): peripheral dropped the connection");
            self.events.push(LinkEvent::Disconnected);
        }
    }

    // ── Internal ──────────────────────────────────────────────

    fn check(&mut self, stage: SimStage, err: LinkError) -> Result<(), LinkError> {
        if self.fail_at == Some(stage) {
            if self.fail_once {
                self.fail_at = None;
            }
            return Err(err);
        }
        Ok(())
    }

    fn reset_session(&mut self) {
        self.connected = false;
        self.service_resolved = false;
        self.char_resolved = false;
        self.notifying = false;
    }
}

impl GattClient for SimGattClient {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn request_device(&mut self, service: u128) -> Result<(), LinkError> {
        self.check(SimStage::RequestDevice, LinkError::NoDeviceSelected)?;
        if service != SERVICE_UUID {
            return Err(LinkError::NoDeviceSelected);
        }
        self.device_selected = true;
        info!("BLE(sim): device selected");
        Ok(())
    }

    async fn connect(&mut self) -> Result<(), LinkError> {
        if !self.device_selected {
            return Err(LinkError::ConnectFailed);
        }
        self.check(SimStage::Connect, LinkError::ConnectFailed)?;
        self.connected = true;
        Ok(())
    }

    async fn primary_service(&mut self, service: u128) -> Result<(), LinkError> {
        if !self.connected {
            return Err(LinkError::NotConnected);
        }
        self.check(SimStage::PrimaryService, LinkError::ServiceNotFound)?;
        if service != SERVICE_UUID {
            return Err(LinkError::ServiceNotFound);
        }
        self.service_resolved = true;
        Ok(())
    }

    async fn characteristic(&mut self, characteristic: u128) -> Result<(), LinkError> {
        if !self.service_resolved {
            return Err(LinkError::ServiceNotFound);
        }
        self.check(SimStage::Characteristic, LinkError::CharacteristicNotFound)?;
        if characteristic != BUTTON_CHAR_UUID {
            return Err(LinkError::CharacteristicNotFound);
        }
        self.char_resolved = true;
        Ok(())
    }

    async fn start_notifications(&mut self) -> Result<(), LinkError> {
        if !self.char_resolved {
            return Err(LinkError::CharacteristicNotFound);
        }
        self.check(SimStage::StartNotifications, LinkError::NotifyFailed)?;
        self.notifying = true;
        Ok(())
    }

    async fn read_value(&mut self) -> Result<Payload, LinkError> {
        if !self.char_resolved {
            return Err(LinkError::CharacteristicNotFound);
        }
        self.check(SimStage::Read, LinkError::ReadFailed)?;
        Ok(self.value.clone())
    }

    fn disconnect(&mut self) -> Result<(), LinkError> {
        if !self.connected {
            return Err(LinkError::NotConnected);
        }
        self.reset_session();
        self.events.push(LinkEvent::Disconnected);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

//! BLE button link adapter.
//!
//! Drives a [`GattClient`] through the connect sequence for the button
//! peripheral and turns its notifications into writes on the pressed
//! cell.
//!
//! ## GATT layout (peripheral side)
//!
//! | Item            | UUID                                     | Perms        |
//! |-----------------|------------------------------------------|--------------|
//! | Button service  | `19b10000-e8f2-537e-4f6c-d104768a1214`   |              |
//! | Button state    | `2A57` (16-bit)                          | Read+Notify  |
//!
//! The button state characteristic carries one byte: `1` held, `0` released.
//!
//! ## Event flow
//!
//! Platform callbacks (value changed, GATT server disconnected) run outside
//! the frame loop.  They push [`LinkEvent`]s into a bounded
//! [`LinkEventQueue`]; [`PeripheralLink::poll`] drains it between frames.

use std::sync::Arc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::{debug, error, info, warn};

use crate::app::ports::GattClient;
use crate::error::LinkError;
use crate::hud::link_button_label;
use crate::input::{FlagWriter, Payload, decode_notification};

// ───────────────────────────────────────────────────────────────
// Constants
// ───────────────────────────────────────────────────────────────

/// Bluetooth base UUID used to expand 16-bit assigned numbers.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

pub const SERVICE_UUID: u128 = 0x19b10000_e8f2_537e_4f6c_d104768a1214;
pub const BUTTON_CHAR_UUID: u128 = uuid16(0x2A57);

/// Pending link events held between frames.
pub const LINK_QUEUE_DEPTH: usize = 16;

/// Source tag of link writes on the pressed cell.
const BLE_SOURCE: u8 = 1;

/// Expand a 16-bit UUID onto the Bluetooth base UUID.
pub const fn uuid16(short: u16) -> u128 {
    BLUETOOTH_BASE_UUID | ((short as u128) << 96)
}

// ───────────────────────────────────────────────────────────────
// Event queue
// ───────────────────────────────────────────────────────────────

/// Asynchronous events raised by the platform on behalf of the link.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    /// Characteristic value changed.
    Notification(Payload),
    /// The GATT server connection dropped (either side).
    Disconnected,
}

/// Bounded MPMC queue from platform callbacks to the frame loop.
pub struct LinkEventQueue {
    channel: Channel<CriticalSectionRawMutex, LinkEvent, LINK_QUEUE_DEPTH>,
}

impl Default for LinkEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkEventQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Enqueue an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&self, event: LinkEvent) -> bool {
        if self.channel.try_send(event).is_err() {
            warn!("BLE: event queue full, dropping event");
            return false;
        }
        true
    }

    /// Dequeue the oldest event.
    pub fn pop(&self) -> Option<LinkEvent> {
        self.channel.try_receive().ok()
    }
}

// ───────────────────────────────────────────────────────────────
// Link state
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Idle,
    Connecting,
    Connected,
    Failed,
}

// ───────────────────────────────────────────────────────────────
// Peripheral link
// ───────────────────────────────────────────────────────────────

pub struct PeripheralLink<G: GattClient> {
    client: G,
    events: Arc<LinkEventQueue>,
    pressed: FlagWriter,
    connected: FlagWriter,
    state: LinkState,
    /// Unsupported-platform errors are logged once per session.
    unsupported_reported: bool,
}

impl<G: GattClient> PeripheralLink<G> {
    pub fn new(
        client: G,
        events: Arc<LinkEventQueue>,
        pressed: FlagWriter,
        connected: FlagWriter,
    ) -> Self {
        Self {
            client,
            events,
            pressed: pressed.tagged(BLE_SOURCE),
            connected,
            state: LinkState::Idle,
            unsupported_reported: false,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == LinkState::Connected
    }

    /// Label for the on-screen connect/disconnect button.
    pub fn button_label(&self) -> &'static str {
        link_button_label(self.is_connected())
    }

    pub fn client(&self) -> &G {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut G {
        &mut self.client
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Run the full connect sequence once.  No retry on failure; the
    /// user re-triggers from the button.
    pub async fn connect(&mut self) -> Result<(), LinkError> {
        if self.is_connected() {
            return Ok(());
        }

        if !self.client.is_supported() {
            if !self.unsupported_reported {
                error!("BLE: {}", LinkError::Unsupported);
                self.unsupported_reported = true;
            }
            self.state = LinkState::Failed;
            return Err(LinkError::Unsupported);
        }

        self.state = LinkState::Connecting;
        info!("BLE: connecting (service {:032x})", SERVICE_UUID);

        match self.establish().await {
            Ok(()) => {
                self.state = LinkState::Connected;
                self.connected.set(true);
                info!("BLE: connected");
                Ok(())
            }
            Err(e) => {
                error!("BLE: connect error: {}", e);
                // Leave no half-open GATT connection behind.
                if self.client.is_connected() {
                    let _ = self.client.disconnect().inspect_err(|e| {
                        warn!("BLE: cleanup disconnect error: {}", e);
                    });
                }
                self.state = LinkState::Failed;
                Err(e)
            }
        }
    }

    /// Ask the platform to drop the connection.  State is cleared when the
    /// resulting [`LinkEvent::Disconnected`] is polled.
    pub fn disconnect(&mut self) -> Result<(), LinkError> {
        if !self.client.is_connected() {
            return Ok(());
        }
        self.client.disconnect().inspect_err(|e| {
            error!("BLE: disconnect error: {}", e);
        })
    }

    /// Button click: connect when disconnected, disconnect otherwise.
    pub async fn toggle(&mut self) -> Result<(), LinkError> {
        if self.is_connected() {
            self.disconnect()
        } else {
            self.connect().await
        }
    }

    // ── Event pump ────────────────────────────────────────────

    /// Drain queued platform events.  Returns how many were handled.
    pub fn poll(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.events.pop() {
            handled += 1;
            match event {
                LinkEvent::Notification(payload) => self.on_notification(&payload),
                LinkEvent::Disconnected => self.on_disconnected(),
            }
        }
        handled
    }

    // ── Internal ──────────────────────────────────────────────

    async fn establish(&mut self) -> Result<(), LinkError> {
        self.client.request_device(SERVICE_UUID).await?;
        self.client.connect().await?;
        self.client.primary_service(SERVICE_UUID).await?;
        self.client.characteristic(BUTTON_CHAR_UUID).await?;
        self.client.start_notifications().await?;

        // Some stacks refuse a read before the first notification.
        match self.client.read_value().await {
            Ok(value) => {
                if let Some(pressed) = decode_notification(&value) {
                    info!("BLE: initial byte {}", value[0]);
                    self.pressed.set(pressed);
                }
            }
            Err(e) => debug!("BLE: initial read skipped ({})", e),
        }
        Ok(())
    }

    fn on_notification(&mut self, payload: &[u8]) {
        match decode_notification(payload) {
            Some(pressed) => {
                debug!("BLE: notify byte {}", payload[0]);
                self.pressed.set(pressed);
            }
            None => debug!("BLE: empty notification ignored"),
        }
    }

    fn on_disconnected(&mut self) {
        // Left over from an earlier session; the current one is still up.
        if self.client.is_connected() {
            debug!("BLE: stale disconnect ignored");
            return;
        }
        if self.state == LinkState::Connected {
            info!("BLE: disconnected");
            // A button we can no longer hear cannot stay held.  A press
            // from another source is left alone.
            self.pressed.release_if_last_writer();
        }
        self.connected.set(false);
        if self.state != LinkState::Failed {
            self.state = LinkState::Idle;
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────

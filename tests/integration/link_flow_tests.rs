//! Integration tests for the BLE button → pressed cell → ramp flow.
//!
//! Drives the simulated GATT client through connect, notifications and
//! disconnects, and checks what the viewer core sees on each frame.

use std::sync::Arc;

use futures_lite::future::block_on;
use spinview::adapters::ble::{LinkEventQueue, LinkState, PeripheralLink};
use spinview::adapters::sim_gatt::{SimGattClient, SimStage};
use spinview::app::service::ViewerService;
use spinview::config::ViewerConfig;
use spinview::control::ramp::{RampMode, SPIN_MIN};
use spinview::error::LinkError;
use spinview::input::FlagCell;

use crate::mock_ports::{MockRenderer, RecordingSink};

struct Rig {
    link: PeripheralLink<SimGattClient>,
    app: ViewerService,
    out: MockRenderer,
    sink: RecordingSink,
}

impl Rig {
    fn new(configure: impl FnOnce(SimGattClient) -> SimGattClient) -> Self {
        let queue = Arc::new(LinkEventQueue::new());
        let client = configure(SimGattClient::new(Arc::clone(&queue)));
        let (pw, pr) = FlagCell::new(false);
        let (cw, cr) = FlagCell::new(false);
        Self {
            link: PeripheralLink::new(client, queue, pw, cw),
            app: ViewerService::new(&ViewerConfig::default(), pr, cr),
            out: MockRenderer::new(),
            sink: RecordingSink::new(),
        }
    }

    /// One iteration of the host frame loop.
    fn frame(&mut self) {
        self.link.poll();
        self.app.tick(&mut self.out, &mut self.sink);
    }
}

#[test]
fn button_press_over_ble_spins_up() {
    let mut r = Rig::new(|c| c);
    block_on(r.link.connect()).unwrap();

    r.link.client().notify(&[1]);
    for _ in 0..10 {
        r.frame();
    }
    assert_eq!(r.app.mode(), RampMode::Accelerating);
    assert!(r.app.ramp_state().velocity > SPIN_MIN);

    r.link.client().notify(&[0]);
    for _ in 0..50 {
        r.frame();
    }
    assert_eq!(r.app.ramp_state().velocity, SPIN_MIN);
}

#[test]
fn non_one_byte_reads_as_released() {
    let mut r = Rig::new(|c| c);
    block_on(r.link.connect()).unwrap();
    r.link.client().notify(&[1]);
    r.frame();
    r.link.client().notify(&[2]);
    r.frame();
    assert_eq!(r.app.mode(), RampMode::Decelerating);
}

#[test]
fn empty_notification_is_ignored() {
    let mut r = Rig::new(|c| c);
    block_on(r.link.connect()).unwrap();
    r.link.client().notify(&[1]);
    r.frame();
    r.link.client().notify(&[]);
    r.frame();
    assert!(r.app.status().pressed);
}

#[test]
fn initial_value_applies_before_first_notification() {
    let mut r = Rig::new(|c| c.with_initial_value(&[1]));
    block_on(r.link.connect()).unwrap();
    r.frame();
    assert_eq!(r.app.mode(), RampMode::Accelerating);
}

#[test]
fn hud_shows_connection_lifecycle() {
    let mut r = Rig::new(|c| c);
    r.frame();
    assert_eq!(r.out.last_hud(), Some("BLE: disconnected | pressed=false"));

    block_on(r.link.connect()).unwrap();
    r.frame();
    assert_eq!(r.out.last_hud(), Some("BLE: connected | pressed=false"));

    r.link.client_mut().drop_connection();
    r.frame();
    assert_eq!(r.out.last_hud(), Some("BLE: disconnected | pressed=false"));
    assert_eq!(r.link.state(), LinkState::Idle);
}

#[test]
fn peripheral_drop_while_held_releases() {
    let mut r = Rig::new(|c| c);
    block_on(r.link.connect()).unwrap();
    r.link.client().notify(&[1]);
    r.frame();
    r.link.client_mut().drop_connection();
    r.frame();
    assert_eq!(r.app.mode(), RampMode::Decelerating);
}

#[test]
fn failed_connect_leaves_ramp_on_default_behaviour() {
    for (stage, expected) in [
        (SimStage::RequestDevice, LinkError::NoDeviceSelected),
        (SimStage::Connect, LinkError::ConnectFailed),
        (SimStage::Characteristic, LinkError::CharacteristicNotFound),
        (SimStage::StartNotifications, LinkError::NotifyFailed),
    ] {
        let mut r = Rig::new(|c| c.failing_at(stage));
        assert_eq!(block_on(r.link.connect()), Err(expected));
        assert_eq!(r.link.state(), LinkState::Failed);
        for _ in 0..5 {
            r.frame();
        }
        assert_eq!(r.app.ramp_state().velocity, SPIN_MIN);
        assert!(!r.app.status().connected);
    }
}

#[test]
fn reconnect_after_failure_is_manual() {
    let mut r = Rig::new(|c| c.failing_at(SimStage::Connect));
    assert!(block_on(r.link.connect()).is_err());
    r.frame();
    assert_eq!(r.link.state(), LinkState::Failed);
}

#[test]
fn unsupported_platform_never_connects() {
    let mut r = Rig::new(SimGattClient::unsupported);
    assert_eq!(block_on(r.link.toggle()), Err(LinkError::Unsupported));
    r.frame();
    assert!(!r.app.status().connected);
    assert_eq!(r.link.button_label(), "connect BLE");
}

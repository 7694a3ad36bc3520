//! Integration tests: pressed cell → ViewerService → renderer.

use spinview::app::commands::AppCommand;
use spinview::app::events::AppEvent;
use spinview::app::service::ViewerService;
use spinview::config::ViewerConfig;
use spinview::control::ramp::{ACCEL_ON, RampMode, SPIN_MAX, SPIN_MIN};
use spinview::input::{FlagCell, FlagWriter, KeyboardFallback};

use crate::mock_ports::{MockRenderer, RecordingSink};

struct Rig {
    app: ViewerService,
    pressed: FlagWriter,
    connected: FlagWriter,
    out: MockRenderer,
    sink: RecordingSink,
}

fn rig(config: &ViewerConfig) -> Rig {
    let (pw, pr) = FlagCell::new(false);
    let (cw, cr) = FlagCell::new(false);
    Rig {
        app: ViewerService::new(config, pr, cr),
        pressed: pw,
        connected: cw,
        out: MockRenderer::new(),
        sink: RecordingSink::new(),
    }
}

#[test]
fn start_emits_started_on_floor() {
    let mut r = rig(&ViewerConfig::default());
    r.app.start(&mut r.sink);
    assert_eq!(
        r.sink.events,
        vec![AppEvent::Started {
            velocity: SPIN_MIN
        }]
    );
}

#[test]
fn no_input_coasts_at_floor() {
    let mut r = rig(&ViewerConfig::default());
    for _ in 0..10 {
        r.app.tick(&mut r.out, &mut r.sink);
    }
    assert_eq!(r.app.ramp_state().velocity, SPIN_MIN);
    let angle = r.out.last_angle().unwrap();
    assert!((angle - 10.0 * SPIN_MIN).abs() < 1e-12);
}

#[test]
fn holding_reaches_ceiling_then_release_returns_to_floor() {
    let mut r = rig(&ViewerConfig::default());
    r.pressed.set(true);
    for _ in 0..300 {
        r.app.tick(&mut r.out, &mut r.sink);
    }
    assert_eq!(r.app.ramp_state().velocity, SPIN_MAX);
    assert_eq!(r.app.mode(), RampMode::Accelerating);

    r.pressed.set(false);
    for _ in 0..300 {
        r.app.tick(&mut r.out, &mut r.sink);
    }
    assert_eq!(r.app.ramp_state().velocity, SPIN_MIN);
    assert_eq!(r.app.mode(), RampMode::Decelerating);
}

#[test]
fn one_frame_flicker_changes_direction_immediately() {
    let mut r = rig(&ViewerConfig::default());
    r.pressed.set(true);
    r.app.tick(&mut r.out, &mut r.sink);
    r.pressed.set(false);
    r.app.tick(&mut r.out, &mut r.sink);
    // Up one step, then straight back down onto the floor.
    assert!((r.app.ramp_state().velocity - SPIN_MIN).abs() < 1e-12);
    let modes: Vec<_> = r
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::ModeChanged { to, .. } => Some(*to),
            _ => None,
        })
        .collect();
    assert_eq!(modes, vec![RampMode::Accelerating, RampMode::Decelerating]);
}

#[test]
fn writes_between_frames_only_latest_counts() {
    let mut r = rig(&ViewerConfig::default());
    r.pressed.set(true);
    r.pressed.set(false);
    r.pressed.set(true);
    r.app.tick(&mut r.out, &mut r.sink);
    assert!((r.app.ramp_state().velocity - (SPIN_MIN + ACCEL_ON)).abs() < 1e-12);
}

#[test]
fn hud_reflects_connection_and_pressed() {
    let mut r = rig(&ViewerConfig::default());
    r.app.tick(&mut r.out, &mut r.sink);
    assert_eq!(r.out.last_hud(), Some("BLE: disconnected | pressed=false"));
    r.connected.set(true);
    r.pressed.set(true);
    r.app.tick(&mut r.out, &mut r.sink);
    assert_eq!(r.out.last_hud(), Some("BLE: connected | pressed=true"));
}

#[test]
fn telemetry_follows_interval() {
    let config = ViewerConfig {
        hud_interval_frames: 5,
        ..ViewerConfig::default()
    };
    let mut r = rig(&config);
    for _ in 0..23 {
        r.app.tick(&mut r.out, &mut r.sink);
    }
    assert_eq!(r.sink.telemetry_count(), 4);
    assert_eq!(r.app.frame_count(), 23);
    assert_eq!(r.out.poses.len(), 23);
}

#[test]
fn keyboard_commands_drive_the_ramp() {
    let mut r = rig(&ViewerConfig::default());
    let mut kb = KeyboardFallback::new(r.pressed.clone());
    assert!(
        r.app
            .handle_command(&AppCommand::KeyDown("Space".into()), &mut kb)
    );
    r.app.tick(&mut r.out, &mut r.sink);
    assert_eq!(r.app.mode(), RampMode::Accelerating);
    r.app
        .handle_command(&AppCommand::KeyUp("Space".into()), &mut kb);
    r.app.tick(&mut r.out, &mut r.sink);
    assert_eq!(r.app.mode(), RampMode::Decelerating);
}

//! SpinView: host entry point
//!
//! Drives the viewer core with a logging renderer and a simulated button
//! peripheral.  Lines on stdin stand in for the UI:
//!
//! | Line          | Effect                                        |
//! |---------------|-----------------------------------------------|
//! | `c`           | click the connect/disconnect button           |
//! | `n <bytes…>`  | peripheral notifies the given bytes (`n 1`)   |
//! | `d`           | peripheral drops the connection               |
//! | `space`       | Space key down                                |
//! | `space up`    | Space key up                                  |
//! | `q`           | quit                                          |
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  stdin thread ──▶ COMMAND_CHANNEL ──▶ frame loop          │
//! │                                                          │
//! │  SimGattClient ──▶ LinkEventQueue ──▶ PeripheralLink ─┐   │
//! │  KeyboardFallback ────────────────────────────────────┤   │
//! │                                         pressed cell ◀┘   │
//! │                                                          │
//! │  ViewerService (ramp) ──▶ LogRenderer · LogEventSink      │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use futures_lite::future::block_on;
use log::{info, warn};

use spinview::adapters::ble::{LinkEventQueue, PeripheralLink};
use spinview::adapters::config_store::JsonConfigStore;
use spinview::adapters::log_sink::{LogEventSink, LogRenderer};
use spinview::adapters::sim_gatt::SimGattClient;
use spinview::app::commands::AppCommand;
use spinview::app::ports::{ConfigError, ConfigPort};
use spinview::app::service::ViewerService;
use spinview::config::ViewerConfig;
use spinview::input::{FlagCell, KeyboardFallback, payload_from};

/// stdin thread → frame loop.
static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, AppCommand, 8> = Channel::new();

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("SpinView v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => match JsonConfigStore::new(path).load() {
            Ok(cfg) => cfg,
            Err(ConfigError::NotFound) => {
                info!("Config file not found, using defaults");
                ViewerConfig::default()
            }
            Err(e) => {
                warn!("Config load failed ({}), using defaults", e);
                ViewerConfig::default()
            }
        },
        None => ViewerConfig::default(),
    };

    // ── 2. Input cells + sources ──────────────────────────────
    let (pressed_w, pressed_r) = FlagCell::new(false);
    let (connected_w, connected_r) = FlagCell::new(false);

    let link_events = Arc::new(LinkEventQueue::new());
    let gatt = SimGattClient::new(Arc::clone(&link_events));
    let mut link = PeripheralLink::new(gatt, link_events, pressed_w.clone(), connected_w);
    let mut keyboard = KeyboardFallback::new(pressed_w);

    // ── 3. Core + output adapters ─────────────────────────────
    let mut app = ViewerService::new(&config, pressed_r, connected_r);
    let mut renderer = LogRenderer::new();
    let mut sink = LogEventSink::new();
    app.start(&mut sink);

    spawn_stdin_reader();
    info!("Ready. Button: [{}]", link.button_label());

    // ── 4. Frame loop ─────────────────────────────────────────
    let frame = Duration::from_millis(u64::from(config.frame_interval_ms));
    loop {
        std::thread::sleep(frame);

        while let Ok(cmd) = COMMAND_CHANNEL.try_receive() {
            if app.handle_command(&cmd, &mut keyboard) {
                continue;
            }
            match cmd {
                AppCommand::ToggleLink => {
                    // Failures are logged by the link; the user clicks again.
                    let _ = block_on(link.toggle());
                }
                AppCommand::PeripheralNotify(payload) => {
                    if !link.client().notify(&payload) {
                        warn!("Peripheral: not subscribed, notification lost");
                    }
                }
                AppCommand::PeripheralDisconnect => link.client_mut().drop_connection(),
                AppCommand::Quit => {
                    info!("Quit after {} frames", app.frame_count());
                    return Ok(());
                }
                AppCommand::KeyDown(_) | AppCommand::KeyUp(_) => {}
            }
            info!("Button: [{}]", link.button_label());
        }

        link.poll();
        app.tick(&mut renderer, &mut sink);
    }
}

fn spawn_stdin_reader() {
    std::thread::spawn(|| {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(cmd) => {
                    let quit = cmd == AppCommand::Quit;
                    block_on(COMMAND_CHANNEL.send(cmd));
                    if quit {
                        return;
                    }
                }
                None if line.trim().is_empty() => {}
                None => warn!("Unknown command: {:?}", line.trim()),
            }
        }
        // stdin closed: shut down like `q`.
        block_on(COMMAND_CHANNEL.send(AppCommand::Quit));
    });
}

fn parse_command(line: &str) -> Option<AppCommand> {
    let mut words = line.split_whitespace();
    let cmd = match (words.next()?, words.next()) {
        ("c", None) => AppCommand::ToggleLink,
        ("d", None) => AppCommand::PeripheralDisconnect,
        ("q", None) => AppCommand::Quit,
        ("space", None) => AppCommand::KeyDown("Space".into()),
        ("space", Some("up")) => AppCommand::KeyUp("Space".into()),
        ("n", first) => {
            let bytes = first
                .into_iter()
                .chain(words)
                .map(str::parse::<u8>)
                .collect::<core::result::Result<Vec<u8>, _>>()
                .ok()?;
            return Some(AppCommand::PeripheralNotify(payload_from(&bytes)));
        }
        _ => return None,
    };
    Some(cmd)
}

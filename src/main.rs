//! Deflect entry point
//!
//! Runs the simulation headless: builds the scene from settings, aims the
//! ball at the canvas center and steps it a fixed number of ticks.
//!
//! Usage: `deflect [settings.json] [ticks]`

use deflect::Settings;
use deflect::sim::{SimState, TickInput, tick};

/// Ticks to run when none are given
const DEFAULT_TICKS: u64 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Deflect (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let ticks = match args.next().map(|t| t.parse::<u64>()) {
        Some(Ok(ticks)) => ticks,
        Some(Err(e)) => {
            log::warn!("Bad tick count ({e}); running {DEFAULT_TICKS}");
            DEFAULT_TICKS
        }
        None => DEFAULT_TICKS,
    };

    let mut state = match SimState::from_settings(&settings) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot build scene: {e}");
            std::process::exit(1);
        }
    };

    let aim = TickInput {
        aim: Some(settings.canvas_center()),
        ..Default::default()
    };
    let idle = TickInput::default();
    for i in 0..ticks {
        tick(&mut state, if i == 0 { &aim } else { &idle });
    }

    log::info!(
        "After {} ticks: ball at ({:.2}, {:.2}), {} contacts resolved",
        state.time_ticks,
        state.circle.center.x,
        state.circle.center.y,
        state.contacts_resolved
    );
    println!(
        "{} ticks, ball at ({:.2}, {:.2}), {} contacts",
        state.time_ticks, state.circle.center.x, state.circle.center.y, state.contacts_resolved
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; the host page drives `tick`
}

//! Raindrop entry point
//!
//! Initializes logging, builds the per-run configuration, and hands control
//! to the platform loop. Exits 0 on quit or completion, 1 if the windowing
//! or graphics stack cannot be brought up.

use std::process;

use raindrop::GameConfig;
use raindrop::platform;
use raindrop::sim::GameState;

fn main() {
    env_logger::init();

    let config = GameConfig::default();
    let seed: u64 = rand::random();
    log::info!(
        "Raindrop starting (seed {seed}, {} columns x {} slots, gold quota {})",
        config.columns,
        config.slots_per_column,
        config.target_gold
    );

    let state = GameState::new(config, seed);
    if let Err(e) = platform::run(state) {
        log::error!("{e}");
        eprintln!("error initializing window: {e}");
        process::exit(1);
    }
}

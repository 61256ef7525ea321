//! Goblin Skirmish - Entry Point
//!
//! Sets up logging, then runs one interactive game over stdin/stdout.

use goblin_skirmish::core::config::config;
use goblin_skirmish::core::error::Result;
use goblin_skirmish::game::console::run_game;

use std::io::{self, BufRead};

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("goblin_skirmish=info")
        .init();

    tracing::info!("Goblin Skirmish starting...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_game(&mut stdin.lock(), &mut stdout.lock())?;

    if config().pause_on_exit {
        // Hold the final printout until the player presses ENTER.
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
    }

    tracing::info!("Goblin Skirmish done");
    Ok(())
}

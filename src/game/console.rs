//! Interactive console front end
//!
//! Generic over the reader and writer so the whole flow can be driven by
//! tests with in-memory buffers. User-facing notices go to `out`; abnormal
//! paths are also logged.

use std::io::{BufRead, Write};

use crate::combat::Weapon;
use crate::core::config::config;
use crate::core::error::Result;
use crate::entity::{spawn_for_mode, Character, SpawnMode};
use crate::game::manager::manager;
use crate::game::session::GameSession;

/// Run one full interactive game over the given streams
pub fn run_game<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Game!")?;

    let weapon = choose_weapon(input, out)?;

    let game_manager = manager();
    game_manager.start(out)?;

    let mut character = Character::new();
    character.equip(weapon);

    let mode = choose_spawn_mode(input, out)?;
    let enemy = spawn_for_mode(mode);

    let mut session = GameSession::new(&character);
    session.add_enemy(enemy);
    session.run(out)?;

    writeln!(out, "\nThanks for playing the Game!")?;
    Ok(())
}

/// Prompt for a weapon choice, substituting the configured default on
/// unrecognized input
fn choose_weapon<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Weapon> {
    writeln!(out, "\nSelect your weapon type:")?;
    writeln!(out, "1. Sword")?;
    writeln!(out, "2. Bow")?;
    write!(out, "Enter your choice: ")?;
    out.flush()?;

    let choice = read_line(input)?;
    match Weapon::from_selector(&choice) {
        Ok(weapon) => Ok(weapon),
        Err(err) => {
            let fallback = config().default_weapon;
            tracing::warn!("{}, equipping {}", err, fallback.name());
            writeln!(out, "Invalid choice. Using default weapon ({}).", fallback.name())?;
            Ok(fallback)
        }
    }
}

/// Prompt for the enemy spawn mode, substituting the configured default on
/// unrecognized input
fn choose_spawn_mode<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<SpawnMode> {
    writeln!(out, "\nCreate an enemy (Goblin) by cloning:")?;
    writeln!(out, "1. Clone")?;
    writeln!(out, "2. Create New")?;
    write!(out, "Enter your choice: ")?;
    out.flush()?;

    let choice = read_line(input)?;
    match SpawnMode::from_selector(&choice) {
        Ok(mode) => Ok(mode),
        Err(err) => {
            tracing::warn!("{}, spawning fresh", err);
            writeln!(out, "Invalid choice. Creating a new enemy (Goblin).")?;
            Ok(config().default_spawn_mode)
        }
    }
}

/// Read one line; EOF comes back as an empty selector
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

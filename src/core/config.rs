//! Game configuration with documented defaults
//!
//! The fallback behavior for unrecognized menu input lives here, so the
//! console layer and the tests agree on it.

use crate::combat::Weapon;
use crate::entity::SpawnMode;

/// Configuration for a game run
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Weapon equipped when the weapon selector is unrecognized
    pub default_weapon: Weapon,

    /// Spawn mode used when the enemy selector is unrecognized
    pub default_spawn_mode: SpawnMode,

    /// Wait for one more ENTER before the process exits
    ///
    /// Keeps the final printout on screen when the game runs in a
    /// terminal window that closes with the process.
    pub pause_on_exit: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_weapon: Weapon::Sword,
            default_spawn_mode: SpawnMode::Fresh,
            pause_on_exit: true,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Get the global game config (initializes with defaults if not set)
pub fn config() -> &'static GameConfig {
    CONFIG.get_or_init(GameConfig::default)
}

/// Set the global game config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: GameConfig) -> Result<(), GameConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.default_weapon, Weapon::Sword);
        assert_eq!(config.default_spawn_mode, SpawnMode::Fresh);
        assert!(config.pause_on_exit);
    }

    #[test]
    fn test_global_access_is_stable() {
        assert!(std::ptr::eq(config(), config()));
    }
}

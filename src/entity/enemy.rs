//! Enemy variants and spawning
//!
//! Enemies form a closed set like weapons. Duplication is plain `Clone`:
//! enemy state is immutable, so a shallow copy is a complete copy.

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;

/// Enemy kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Enemy {
    Goblin,
}

impl Enemy {
    /// Spawn the default enemy kind
    ///
    /// Takes no selector yet; new kinds extend the enum and grow this
    /// into a match like `Weapon::from_selector`.
    pub fn spawn() -> Self {
        Self::Goblin
    }

    /// Fixed attack description for this variant
    pub fn attack_description(&self) -> &'static str {
        match self {
            Self::Goblin => "Goblin attacks!",
        }
    }
}

/// How the session's enemy instance is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnMode {
    /// Spawn a brand new instance
    Fresh,
    /// Spawn an instance, then hand out its duplicate
    Cloned,
}

impl SpawnMode {
    /// Strict menu-selector parse: "1" is Fresh, "2" is Cloned
    pub fn from_selector(selector: &str) -> Result<Self, GameError> {
        match selector.trim() {
            "1" => Ok(Self::Fresh),
            "2" => Ok(Self::Cloned),
            other => Err(GameError::UnknownSpawnChoice(other.to_string())),
        }
    }
}

impl Default for SpawnMode {
    fn default() -> Self {
        Self::Fresh
    }
}

/// Produce the enemy instance a session should use for the given mode
pub fn spawn_for_mode(mode: SpawnMode) -> Enemy {
    match mode {
        SpawnMode::Fresh => Enemy::spawn(),
        SpawnMode::Cloned => {
            let template = Enemy::spawn();
            template.clone()
        }
    }
}

//! Weapon variants for the skirmish printout
//!
//! Weapons form a closed set; attack behavior is a match on the variant.

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;

/// Weapon kind - determines the attack line a character produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    /// Close-quarters blade, the default armament
    Sword,
    /// Ranged shot
    Bow,
}

impl Weapon {
    /// Display name used in menus and notices
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sword => "Sword",
            Self::Bow => "Bow",
        }
    }

    /// Fixed attack description for this variant
    pub fn attack_description(&self) -> &'static str {
        match self {
            Self::Sword => "Attacking with a sword!",
            Self::Bow => "Shooting arrows with a bow!",
        }
    }

    /// Strict menu-selector parse: "1" is Sword, "2" is Bow
    ///
    /// Surrounding whitespace is ignored. Anything else errs; the console
    /// layer decides whether to substitute a default.
    pub fn from_selector(selector: &str) -> Result<Self, GameError> {
        match selector.trim() {
            "1" => Ok(Self::Sword),
            "2" => Ok(Self::Bow),
            other => Err(GameError::UnknownWeaponChoice(other.to_string())),
        }
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::Sword
    }
}

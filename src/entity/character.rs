//! Player character state

use serde::{Deserialize, Serialize};

use crate::combat::Weapon;

/// Notice surfaced when attacking bare-handed
pub const NO_WEAPON_NOTICE: &str = "No weapon equipped!";

/// A character holding at most one equipped weapon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    weapon: Option<Weapon>,
}

impl Character {
    /// Create an unarmed character
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip a weapon, returning the previously equipped one if any
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    /// Currently equipped weapon, if any
    pub fn weapon(&self) -> Option<Weapon> {
        self.weapon
    }

    /// The line this character contributes to the attack printout
    ///
    /// Delegates to the equipped weapon; an unarmed character reports a
    /// fixed notice instead of failing.
    pub fn attack_line(&self) -> &'static str {
        match self.weapon {
            Some(weapon) => weapon.attack_description(),
            None => NO_WEAPON_NOTICE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_character_reports_notice() {
        let character = Character::new();
        assert_eq!(character.weapon(), None);
        assert_eq!(character.attack_line(), NO_WEAPON_NOTICE);
    }

    #[test]
    fn test_attack_delegates_to_weapon() {
        let mut character = Character::new();
        character.equip(Weapon::Bow);
        assert_eq!(character.attack_line(), "Shooting arrows with a bow!");
    }

    #[test]
    fn test_reequip_replaces_and_returns_previous() {
        let mut character = Character::new();
        assert_eq!(character.equip(Weapon::Sword), None);
        assert_eq!(character.equip(Weapon::Bow), Some(Weapon::Sword));
        assert_eq!(character.weapon(), Some(Weapon::Bow));
        assert_eq!(character.attack_line(), "Shooting arrows with a bow!");
    }
}

//! One skirmish session: a character against an ordered enemy roster

use std::io::{self, Write};

use crate::entity::{Character, Enemy};

/// A single game run over a borrowed character
#[derive(Debug)]
pub struct GameSession<'a> {
    character: &'a Character,
    enemies: Vec<Enemy>,
}

impl<'a> GameSession<'a> {
    /// Create a session for the given character with an empty roster
    pub fn new(character: &'a Character) -> Self {
        Self {
            character,
            enemies: Vec::new(),
        }
    }

    /// Append an enemy to the roster
    ///
    /// Insertion order is the attack order in the printout.
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Number of enemies on the roster
    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Play out the attack sequence as lines on `out`
    pub fn run(&self, out: &mut impl Write) -> io::Result<()> {
        tracing::info!(enemies = self.enemies.len(), "running session");

        writeln!(out, "\n=== Game Start ===")?;
        writeln!(out, "Your character attacks with:")?;
        writeln!(out, "{}", self.character.attack_line())?;

        writeln!(out, "\nEnemies attack:")?;
        for enemy in &self.enemies {
            writeln!(out, "{}", enemy.attack_description())?;
        }
        writeln!(out, "=== Game Over ===")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Weapon;

    fn printout(session: &GameSession<'_>) -> String {
        let mut out = Vec::new();
        session.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_sequence() {
        let mut character = Character::new();
        character.equip(Weapon::Sword);

        let mut session = GameSession::new(&character);
        session.add_enemy(Enemy::spawn());

        let output = printout(&session);
        let expected = "\n=== Game Start ===\n\
                        Your character attacks with:\n\
                        Attacking with a sword!\n\
                        \n\
                        Enemies attack:\n\
                        Goblin attacks!\n\
                        === Game Over ===\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_unarmed_character_still_runs() {
        let character = Character::new();
        let session = GameSession::new(&character);
        let output = printout(&session);
        assert!(output.contains("No weapon equipped!"));
        assert!(output.contains("=== Game Over ==="));
    }

    #[test]
    fn test_roster_grows_in_order() {
        let character = Character::new();
        let mut session = GameSession::new(&character);
        assert_eq!(session.enemy_count(), 0);

        session.add_enemy(Enemy::spawn());
        session.add_enemy(Enemy::spawn().clone());
        assert_eq!(session.enemy_count(), 2);

        let output = printout(&session);
        assert_eq!(output.matches("Goblin attacks!").count(), 2);
    }
}

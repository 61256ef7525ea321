//! Process-wide game manager
//!
//! Exactly one manager exists per process, created lazily on first access.
//! Callers hold the returned reference and pass it along instead of looking
//! it up again.

use std::io::{self, Write};
use std::sync::OnceLock;

/// Process-wide game coordinator
///
/// Carries no state beyond its existence; construction goes through
/// [`manager`] so no second instance can appear.
#[derive(Debug)]
pub struct GameManager {
    _created: (),
}

static MANAGER: OnceLock<GameManager> = OnceLock::new();

/// Get the process-wide manager (initializes on first access)
pub fn manager() -> &'static GameManager {
    MANAGER.get_or_init(|| GameManager { _created: () })
}

impl GameManager {
    /// Announce the start of a run
    pub fn start(&self, out: &mut impl Write) -> io::Result<()> {
        tracing::info!("game manager starting a run");
        writeln!(out, "Game started!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_identity_across_calls() {
        let first = manager();
        let second = manager();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_start_banner() {
        let mut out = Vec::new();
        manager().start(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Game started!\n");
    }
}

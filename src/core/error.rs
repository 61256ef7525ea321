use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Unknown weapon choice: {0}")]
    UnknownWeaponChoice(String),

    #[error("Unknown spawn choice: {0}")]
    UnknownSpawnChoice(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

pub mod character;
pub mod enemy;

pub use character::Character;
pub use enemy::{spawn_for_mode, Enemy, SpawnMode};

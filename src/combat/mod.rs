pub mod weapons;

pub use weapons::Weapon;

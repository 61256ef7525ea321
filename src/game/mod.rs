pub mod console;
pub mod manager;
pub mod session;

pub use manager::{manager, GameManager};
pub use session::GameSession;

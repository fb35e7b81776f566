mod bullet;
mod enemy;
mod game_state;
mod player;

// Re-export all public types
pub use bullet::Bullet;
pub use enemy::{Enemy, SpawnEdge};
pub use game_state::GameState;
pub use player::Player;

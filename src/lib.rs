//! Circle Shooter - a terminal arcade shooter
//!
//! Core modules:
//! - `game`: session state machine and per-frame simulation
//! - `entities`: player, bullets, enemies
//! - `spawner` / `collision`: enemy spawning and combat resolution
//! - `renderer` / `input`: terminal front end (ratatui + crossterm)
//! - `app`: the fixed-rate frame driver

pub use entities::{Bullet, Enemy, GameState, Player, SpawnEdge};
pub use game::{Game, Session};
pub use highscore::{FileHighScore, HighScoreStore, MemoryHighScore};
pub use input::{InputAction, InputManager, Movement};

pub mod app;
pub mod clock;
pub mod collision;
pub mod entities;
pub mod game;
pub mod geometry;
pub mod highscore;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod spawner;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Playfield dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    pub const PLAYFIELD: Vec2 = Vec2::new(WIDTH, HEIGHT);

    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 5.0;

    pub const BULLET_SPEED: f32 = 12.0;
    pub const BULLET_RADIUS: f32 = 5.0;

    /// Enemies are squares; position is the top-left corner
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Frames between enemy spawns
    pub const SPAWN_INTERVAL: u32 = 40;

    /// Checkerboard cell size for the playing scene
    pub const CELL_SIZE: f32 = 50.0;

    pub const TARGET_FPS: u32 = 60;

    pub const HIGHSCORE_FILE: &str = "highscore.txt";
    pub const LOG_FILE: &str = "circle-shooter.log";
}

//! Frame-counted enemy spawning at the playfield edges

use glam::Vec2;
use rand::Rng;

use crate::consts::SPAWN_INTERVAL;
use crate::entities::{Enemy, SpawnEdge};

/// Emits one enemy every `interval` frames.
///
/// The timer counts frames, not time: skipped frames are never made up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawner {
    timer: u32,
    interval: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(SPAWN_INTERVAL)
    }
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self { timer: 0, interval }
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }

    /// Advances one frame, returning a new enemy when the interval is reached
    pub fn tick<R: Rng>(&mut self, rng: &mut R, bounds: Vec2) -> Option<Enemy> {
        self.timer += 1;
        if self.timer >= self.interval {
            self.timer = 0;
            Some(spawn_enemy(rng, bounds))
        } else {
            None
        }
    }
}

/// Picks an edge uniformly and a uniform point along it
pub fn spawn_enemy<R: Rng>(rng: &mut R, bounds: Vec2) -> Enemy {
    let edge = SpawnEdge::ALL[rng.random_range(0..SpawnEdge::ALL.len())];
    let along = rng.random_range(0.0..=edge.span(bounds));
    Enemy::spawn_at(edge, along, bounds)
}

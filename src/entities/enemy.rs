use glam::Vec2;

use crate::consts::{ENEMY_SIZE, ENEMY_SPEED};
use crate::geometry::direction_to;

/// Playfield edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Top,
        SpawnEdge::Bottom,
        SpawnEdge::Left,
        SpawnEdge::Right,
    ];

    /// Length of the edge, i.e. the range of the coordinate along it
    pub fn span(&self, bounds: Vec2) -> f32 {
        match self {
            SpawnEdge::Top | SpawnEdge::Bottom => bounds.x,
            SpawnEdge::Left | SpawnEdge::Right => bounds.y,
        }
    }
}

/// A square that homes in on the player. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Places an enemy just past `edge`, `along` units from the edge's origin.
    pub fn spawn_at(edge: SpawnEdge, along: f32, bounds: Vec2) -> Self {
        let pos = match edge {
            SpawnEdge::Top => Vec2::new(along, -ENEMY_SIZE),
            SpawnEdge::Bottom => Vec2::new(along, bounds.y + ENEMY_SIZE),
            SpawnEdge::Left => Vec2::new(-ENEMY_SIZE, along),
            SpawnEdge::Right => Vec2::new(bounds.x + ENEMY_SIZE, along),
        };
        Self::new(pos)
    }

    pub fn size(&self) -> f32 {
        ENEMY_SIZE
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENEMY_SIZE / 2.0)
    }

    /// Steps toward `target`, re-aiming every frame
    pub fn update(&mut self, target: Vec2) {
        if let Some(dir) = direction_to(self.pos, target) {
            self.pos += dir * ENEMY_SPEED;
        }
    }

    /// True while no part of the footprint is inside the playfield
    pub fn is_off_screen(&self, bounds: Vec2) -> bool {
        self.pos.x + ENEMY_SIZE <= 0.0
            || self.pos.y + ENEMY_SIZE <= 0.0
            || self.pos.x >= bounds.x
            || self.pos.y >= bounds.y
    }
}

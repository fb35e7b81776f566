use glam::Vec2;

use crate::consts::{BULLET_RADIUS, BULLET_SPEED};
use crate::geometry::direction_to;

/// A straight-flying shot. The direction is fixed when the bullet is fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub dir: Vec2,
}

impl Bullet {
    /// Fires from `origin` toward `target`.
    /// Returns `None` if the target is the origin itself.
    pub fn aimed(origin: Vec2, target: Vec2) -> Option<Self> {
        direction_to(origin, target).map(|dir| Self { pos: origin, dir })
    }

    pub fn radius(&self) -> f32 {
        BULLET_RADIUS
    }

    pub fn update(&mut self) {
        self.pos += self.dir * BULLET_SPEED;
    }

    /// True once the bullet has left the open playfield rectangle
    pub fn is_out_of_bounds(&self, bounds: Vec2) -> bool {
        !(self.pos.x > 0.0 && self.pos.x < bounds.x && self.pos.y > 0.0 && self.pos.y < bounds.y)
    }
}

use glam::Vec2;

use crate::consts::{PLAYER_RADIUS, PLAYER_SPEED};
use crate::input::Movement;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }

    /// Player standing in the middle of a playfield of the given size
    pub fn new_centered(bounds: Vec2) -> Self {
        Self::new(bounds / 2.0)
    }

    pub fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }

    pub fn move_left(&mut self, min_x: f32) {
        if self.pos.x > min_x {
            self.pos.x = (self.pos.x - PLAYER_SPEED).max(min_x);
        }
    }

    pub fn move_right(&mut self, max_x: f32) {
        if self.pos.x < max_x {
            self.pos.x = (self.pos.x + PLAYER_SPEED).min(max_x);
        }
    }

    pub fn move_up(&mut self, min_y: f32) {
        if self.pos.y > min_y {
            self.pos.y = (self.pos.y - PLAYER_SPEED).max(min_y);
        }
    }

    pub fn move_down(&mut self, max_y: f32) {
        if self.pos.y < max_y {
            self.pos.y = (self.pos.y + PLAYER_SPEED).min(max_y);
        }
    }

    /// Moves one step for every held direction, staying inside `bounds`
    pub fn apply_movement(&mut self, movement: Movement, bounds: Vec2) {
        let (min, max) = self.limits(bounds);
        if movement.up {
            self.move_up(min.y);
        }
        if movement.down {
            self.move_down(max.y);
        }
        if movement.left {
            self.move_left(min.x);
        }
        if movement.right {
            self.move_right(max.x);
        }
    }

    /// Lowest and highest allowed center position inside `bounds`
    pub fn limits(&self, bounds: Vec2) -> (Vec2, Vec2) {
        let r = Vec2::splat(self.radius());
        (r, bounds - r)
    }

    pub fn is_within(&self, bounds: Vec2) -> bool {
        let (min, max) = self.limits(bounds);
        self.pos.cmpge(min).all() && self.pos.cmple(max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_player_new_centered() {
        let player = Player::new_centered(BOUNDS);
        assert_eq!(player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(player.radius(), 20.0);
    }

    #[test]
    fn test_player_movement_left() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.move_left(20.0);
        assert_eq!(player.pos.x, 95.0);

        // Test boundary
        player.pos.x = 20.0;
        player.move_left(20.0);
        assert_eq!(player.pos.x, 20.0);
    }

    #[test]
    fn test_player_movement_right() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.move_right(780.0);
        assert_eq!(player.pos.x, 105.0);

        player.pos.x = 778.0;
        player.move_right(780.0);
        assert_eq!(player.pos.x, 780.0);
    }

    #[test]
    fn test_player_movement_up() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.move_up(20.0);
        assert_eq!(player.pos.y, 95.0);

        player.pos.y = 22.0;
        player.move_up(20.0);
        assert_eq!(player.pos.y, 20.0);
    }

    #[test]
    fn test_player_movement_down() {
        let mut player = Player::new(Vec2::new(100.0, 100.0));
        player.move_down(580.0);
        assert_eq!(player.pos.y, 105.0);

        player.pos.y = 580.0;
        player.move_down(580.0);
        assert_eq!(player.pos.y, 580.0);
    }

    #[test]
    fn test_player_limits() {
        let player = Player::new_centered(BOUNDS);
        let (min, max) = player.limits(BOUNDS);
        assert_eq!(min, Vec2::new(20.0, 20.0));
        assert_eq!(max, Vec2::new(780.0, 580.0));
        assert!(player.is_within(BOUNDS));
        assert!(!Player::new(Vec2::new(10.0, 300.0)).is_within(BOUNDS));
    }

    #[test]
    fn test_player_apply_movement_diagonal() {
        let mut player = Player::new_centered(BOUNDS);
        let movement = Movement {
            up: true,
            right: true,
            ..Movement::default()
        };
        player.apply_movement(movement, BOUNDS);
        assert_eq!(player.pos, Vec2::new(405.0, 295.0));

        player.pos = Vec2::new(780.0, 22.0);
        player.apply_movement(movement, BOUNDS);
        assert_eq!(player.pos, Vec2::new(780.0, 20.0));
    }

    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_player_stays_in_bounds_x(
                initial_x in 20.0f32..=780.0,
                moves in prop::collection::vec(prop::bool::ANY, 0..300)
            ) {
                let mut player = Player::new(Vec2::new(initial_x, 300.0));
                for move_right in moves {
                    if move_right {
                        player.move_right(780.0);
                    } else {
                        player.move_left(20.0);
                    }
                }
                prop_assert!(player.pos.x >= 20.0 && player.pos.x <= 780.0);
            }

            #[test]
            fn test_player_stays_in_bounds_y(
                initial_y in 20.0f32..=580.0,
                moves in prop::collection::vec(prop::bool::ANY, 0..300)
            ) {
                let mut player = Player::new(Vec2::new(400.0, initial_y));
                for move_down in moves {
                    if move_down {
                        player.move_down(580.0);
                    } else {
                        player.move_up(20.0);
                    }
                }
                prop_assert!(player.pos.y >= 20.0 && player.pos.y <= 580.0);
            }
        }
    }
}

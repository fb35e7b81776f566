use glam::Vec2;
use ratatui::style::Color;

use super::surface::{Anchor, Surface, TextSize, palette};
use crate::consts::CELL_SIZE;
use crate::entities::{Bullet, Enemy, GameState, Player};

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub score: u32,
    pub high_score: u32,
    /// The last session beat the previous high score
    pub new_record: bool,
    pub bounds: Vec2,
}

/// Turns game state into draw calls for the active screen
#[derive(Debug, Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Composes the whole frame for the current state
    pub fn compose(&self, view: &RenderView, surface: &mut impl Surface) {
        surface.fill_rect(Vec2::ZERO, view.bounds, palette::BLACK);

        match view.game_state {
            GameState::Title => self.compose_title(view, surface),
            GameState::Playing => self.compose_game(view, surface),
            GameState::GameOver => self.compose_game_over(view, surface),
        }
    }

    fn compose_title(&self, view: &RenderView, surface: &mut impl Surface) {
        let mut line = |text: &str, size: TextSize, color: Color, y_offset: f32| {
            centered_text(&mut *surface, view.bounds, text, size, color, y_offset)
        };

        line("CIRCLE SHOOTER", TextSize::Large, palette::BLUE, -100.0);
        line(
            &format!("HIGH SCORE: {}", view.high_score),
            TextSize::Medium,
            palette::YELLOW,
            -30.0,
        );
        line("PRESS SPACE TO PLAY", TextSize::Small, palette::WHITE, 50.0);
        line(
            "WASD = Move | Click = Shoot | Q = Quit",
            TextSize::Small,
            palette::WHITE,
            100.0,
        );
    }

    fn compose_game(&self, view: &RenderView, surface: &mut impl Surface) {
        self.compose_checkerboard(view.bounds, surface);

        for bullet in view.bullets {
            surface.fill_circle(bullet.pos, bullet.radius(), palette::WHITE);
        }

        for enemy in view.enemies {
            surface.fill_rect(enemy.pos, Vec2::splat(enemy.size()), palette::RED);
        }

        surface.fill_circle(view.player.pos, view.player.radius(), palette::YELLOW);

        surface.draw_text(
            &format!("Score: {}", view.score),
            TextSize::Small,
            palette::WHITE,
            Anchor::TopLeft(Vec2::new(10.0, 10.0)),
        );
    }

    /// Gray squares on the black background, top-left cell gray
    fn compose_checkerboard(&self, bounds: Vec2, surface: &mut impl Surface) {
        let cols = (bounds.x / CELL_SIZE).ceil() as u32;
        let rows = (bounds.y / CELL_SIZE).ceil() as u32;

        for row in 0..rows {
            for col in (0..cols).filter(|col| (col + row) % 2 == 0) {
                let pos = Vec2::new(col as f32, row as f32) * CELL_SIZE;
                surface.fill_rect(pos, Vec2::splat(CELL_SIZE), palette::GRAY);
            }
        }
    }

    fn compose_game_over(&self, view: &RenderView, surface: &mut impl Surface) {
        let mut line = |text: &str, size: TextSize, color: Color, y_offset: f32| {
            centered_text(&mut *surface, view.bounds, text, size, color, y_offset)
        };

        line("GAME OVER", TextSize::Large, palette::RED, -100.0);
        line(
            &format!("Final Score: {}", view.score),
            TextSize::Medium,
            palette::WHITE,
            -40.0,
        );
        if view.new_record {
            line("NEW HIGH SCORE!", TextSize::Medium, palette::YELLOW, 10.0);
        }
        line(
            &format!("High Score: {}", view.high_score),
            TextSize::Medium,
            palette::YELLOW,
            60.0,
        );
        line("Press R to Restart", TextSize::Small, palette::WHITE, 120.0);
    }
}

/// Text centered horizontally, `y_offset` below the middle of the playfield
fn centered_text(
    surface: &mut impl Surface,
    bounds: Vec2,
    text: &str,
    size: TextSize,
    color: Color,
    y_offset: f32,
) {
    let anchor = Anchor::Center(bounds / 2.0 + Vec2::new(0.0, y_offset));
    surface.draw_text(text, size, color, anchor);
}

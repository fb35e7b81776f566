//! Session state machine and the per-frame simulation step

use glam::Vec2;
use rand::Rng;

use crate::collision;
use crate::consts::PLAYFIELD;
use crate::entities::{Bullet, Enemy, GameState, Player};
use crate::highscore::HighScoreStore;
use crate::input::{InputAction, Movement};
use crate::renderer::RenderView;
use crate::spawner::Spawner;

/// Everything that is wiped when a new round starts
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub spawner: Spawner,
}

impl Session {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            player: Player::new_centered(bounds),
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            spawner: Spawner::default(),
        }
    }

    /// Back to a fresh round: player centered, no entities, score and
    /// spawn timer at zero
    pub fn reset(&mut self, bounds: Vec2) {
        self.player = Player::new_centered(bounds);
        self.bullets.clear();
        self.enemies.clear();
        self.score = 0;
        self.spawner.reset();
    }
}

/// The whole game: current screen, the running session and the high score
pub struct Game<S: HighScoreStore> {
    state: GameState,
    session: Session,
    high_score: u32,
    /// Set when the last session reached the high score
    new_record: bool,
    bounds: Vec2,
    store: S,
}

impl<S: HighScoreStore> Game<S> {
    /// Starts on the title screen with the stored high score
    pub fn new(mut store: S) -> Self {
        let high_score = store.load();
        Self {
            state: GameState::Title,
            session: Session::new(PLAYFIELD),
            high_score,
            new_record: false,
            bounds: PLAYFIELD,
            store,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_new_record(&self) -> bool {
        self.new_record
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies one discrete input. Actions that don't fit the current
    /// state are ignored; quitting is up to the frame driver.
    pub fn handle_action(&mut self, action: InputAction) {
        match (self.state, action) {
            (GameState::Title, InputAction::Confirm) | (GameState::GameOver, InputAction::Restart) => {
                self.start_session();
            }
            (GameState::Playing, InputAction::Shoot(target)) => self.shoot(target),
            _ => {}
        }
    }

    /// Resets the round and switches to playing
    pub fn start_session(&mut self) {
        self.session.reset(self.bounds);
        self.new_record = false;
        self.state = GameState::Playing;
        log::info!("Session started (high score {})", self.high_score);
    }

    fn shoot(&mut self, target: Vec2) {
        if let Some(bullet) = Bullet::aimed(self.session.player.pos, target) {
            self.session.bullets.push(bullet);
        }
    }

    /// Advances one frame. Does nothing outside of play.
    ///
    /// Order: player movement, spawn timer, bullets (leaving ones dropped),
    /// enemy homing, then collisions.
    pub fn update<R: Rng>(&mut self, movement: Movement, rng: &mut R) {
        if !self.state.is_playing() {
            return;
        }

        let bounds = self.bounds;
        let session = &mut self.session;

        session.player.apply_movement(movement, bounds);

        if let Some(enemy) = session.spawner.tick(rng, bounds) {
            session.enemies.push(enemy);
        }

        for bullet in &mut session.bullets {
            bullet.update();
        }
        session.bullets.retain(|b| !b.is_out_of_bounds(bounds));

        let target = session.player.pos;
        for enemy in &mut session.enemies {
            enemy.update(target);
        }

        let outcome = collision::resolve(&session.player, &mut session.enemies, &mut session.bullets);
        session.score = session.score.saturating_add(outcome.kills);

        if outcome.player_hit {
            self.end_session();
        }
    }

    /// Records the high score if beaten, then shows the game over screen.
    /// Matching the record counts for the banner but is not saved.
    fn end_session(&mut self) {
        let score = self.session.score;
        self.new_record = score >= self.high_score;
        if score > self.high_score {
            self.high_score = score;
            self.store.save(score);
            log::info!("New high score: {score}");
        }
        self.state = GameState::GameOver;
        log::info!("Game over with score {score}");
    }

    pub fn view(&self) -> RenderView<'_> {
        RenderView {
            game_state: self.state,
            player: &self.session.player,
            bullets: &self.session.bullets,
            enemies: &self.session.enemies,
            score: self.session.score,
            high_score: self.high_score,
            new_record: self.new_record,
            bounds: self.bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::MemoryHighScore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playing_game(high_score: u32) -> Game<MemoryHighScore> {
        let mut game = Game::new(MemoryHighScore::new(high_score));
        game.handle_action(InputAction::Confirm);
        game
    }

    #[test]
    fn test_starts_on_title_with_loaded_high_score() {
        let game = Game::new(MemoryHighScore::new(12));
        assert_eq!(game.state(), GameState::Title);
        assert_eq!(game.high_score(), 12);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_confirm_starts_play() {
        let game = playing_game(0);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.session().player.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_actions_ignored_in_wrong_state() {
        let mut game = Game::new(MemoryHighScore::default());
        game.handle_action(InputAction::Restart);
        game.handle_action(InputAction::Shoot(Vec2::ZERO));
        assert_eq!(game.state(), GameState::Title);
        assert!(game.session().bullets.is_empty());

        game.handle_action(InputAction::Confirm);
        game.handle_action(InputAction::Confirm);
        game.handle_action(InputAction::Restart);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_update_does_nothing_outside_play() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = Game::new(MemoryHighScore::default());
        for _ in 0..100 {
            game.update(Movement::default(), &mut rng);
        }
        assert!(game.session().enemies.is_empty());
        assert_eq!(game.session().spawner.timer(), 0);
    }

    #[test]
    fn test_shoot_at_player_position_is_ignored() {
        let mut game = playing_game(0);
        game.handle_action(InputAction::Shoot(Vec2::new(400.0, 300.0)));
        assert!(game.session().bullets.is_empty());

        game.handle_action(InputAction::Shoot(Vec2::new(400.0, 0.0)));
        assert_eq!(game.session().bullets.len(), 1);
    }

    #[test]
    fn test_enemy_spawns_every_forty_frames() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = playing_game(0);
        for _ in 0..39 {
            game.update(Movement::default(), &mut rng);
        }
        assert!(game.session().enemies.is_empty());
        game.update(Movement::default(), &mut rng);
        assert_eq!(game.session().enemies.len(), 1);
    }

    #[test]
    fn test_bullets_leaving_the_field_are_dropped() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = playing_game(0);
        game.handle_action(InputAction::Shoot(Vec2::new(400.0, 0.0)));

        // 300 / 12 = 25 frames to reach y=0
        for _ in 0..24 {
            game.update(Movement::default(), &mut rng);
        }
        assert_eq!(game.session().bullets.len(), 1);
        game.update(Movement::default(), &mut rng);
        assert!(game.session().bullets.is_empty());
    }

    #[test]
    fn test_player_hit_ends_session_and_saves_record() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = playing_game(2);
        game.session_mut().score = 5;
        game.session_mut().enemies.push(Enemy::new(Vec2::new(390.0, 290.0)));

        game.update(Movement::default(), &mut rng);

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.high_score(), 5);
        assert!(game.is_new_record());
        assert_eq!(game.store().saves, vec![5]);
    }

    #[test]
    fn test_tied_score_shows_record_without_saving() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = playing_game(10);
        game.session_mut().score = 10;
        game.session_mut().enemies.push(Enemy::new(Vec2::new(390.0, 290.0)));

        game.update(Movement::default(), &mut rng);

        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.high_score(), 10);
        assert!(game.is_new_record());
        assert!(game.store().saves.is_empty());
    }

    #[test]
    fn test_zero_against_zero_counts_as_record() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = playing_game(0);
        game.session_mut().enemies.push(Enemy::new(Vec2::new(390.0, 290.0)));

        game.update(Movement::default(), &mut rng);

        assert!(game.is_new_record());
        assert!(game.store().saves.is_empty());
    }

    #[test]
    fn test_lower_score_is_not_a_record() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = playing_game(10);
        game.session_mut().score = 9;
        game.session_mut().enemies.push(Enemy::new(Vec2::new(390.0, 290.0)));

        game.update(Movement::default(), &mut rng);

        assert_eq!(game.high_score(), 10);
        assert!(!game.is_new_record());
        assert!(game.store().saves.is_empty());
    }

    #[test]
    fn test_restart_resets_session() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = playing_game(0);
        let right = Movement { right: true, ..Movement::default() };
        for _ in 0..30 {
            game.update(right, &mut rng);
        }
        game.handle_action(InputAction::Shoot(Vec2::new(0.0, 300.0)));
        game.session_mut().score = 4;
        let player_pos = game.session().player.pos;
        game.session_mut().enemies.push(Enemy::new(player_pos));
        game.update(Movement::default(), &mut rng);
        assert_eq!(game.state(), GameState::GameOver);

        game.handle_action(InputAction::Restart);
        let session = game.session();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(session.player.pos, Vec2::new(400.0, 300.0));
        assert!(session.bullets.is_empty());
        assert!(session.enemies.is_empty());
        assert_eq!(session.score, 0);
        assert_eq!(session.spawner.timer(), 0);
        assert!(!game.is_new_record());
        assert_eq!(game.high_score(), 4);
    }
}

/// Which screen is active and which inputs are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Title,
    Playing,
    GameOver,
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        *self == GameState::Playing
    }
}

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use glam::Vec2;
use std::time::Duration;

use crate::entities::GameState;
use crate::renderer::Viewport;

/// How long a press counts as held when the terminal never reports releases.
/// Auto-repeat presses refresh it.
const REPEAT_HOLD_FRAMES: u8 = 12;

/// Marks a key held until its release event arrives
const HELD_UNTIL_RELEASE: u8 = u8::MAX;

/// Discrete game actions produced by input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Quit,
    /// Start playing from the title screen
    Confirm,
    /// Play again from the game over screen
    Restart,
    /// Fire toward a playfield point
    Shoot(Vec2),
}

/// Directional keys currently held
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Movement {
    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Frames each direction stays held for
#[derive(Debug, Default)]
struct KeyState {
    up: u8,
    down: u8,
    left: u8,
    right: u8,
}

impl KeyState {
    fn decay(&mut self) {
        for frames in [&mut self.up, &mut self.down, &mut self.left, &mut self.right] {
            if *frames != HELD_UNTIL_RELEASE {
                *frames = frames.saturating_sub(1);
            }
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Drains every pending terminal event without blocking
pub fn read_pending_events() -> color_eyre::Result<Vec<Event>> {
    let mut events = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        events.push(event::read()?);
    }
    Ok(events)
}

/// Translates terminal events into game actions and held movement keys
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Whether the terminal sends key release events
    reports_release: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputManager {
    pub fn new(reports_release: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            reports_release,
        }
    }

    /// Clears last frame's one-shot actions and ages held keys
    pub fn begin_frame(&mut self) {
        self.oneshot_actions.clear();
        self.key_state.decay();
    }

    pub fn handle_event(&mut self, event: Event, game_state: &GameState, viewport: &Viewport) {
        match event {
            Event::Key(key_event) => self.handle_key_event(key_event, game_state),
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, game_state, viewport),
            Event::FocusLost => self.key_state.clear(),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, game_state: &GameState) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, game_state),
            KeyEventKind::Repeat => self.hold_key(key_event.code, game_state),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, game_state: &GameState) {
        // Quit works in any state
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match game_state {
            GameState::Title => {
                if key_event.code == KeyCode::Char(' ') {
                    self.oneshot_actions.push(InputAction::Confirm);
                }
            }
            GameState::GameOver => {
                if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.oneshot_actions.push(InputAction::Restart);
                }
            }
            GameState::Playing => self.hold_key(key_event.code, game_state),
        }
    }

    /// Marks a movement key held (only tracked while playing)
    fn hold_key(&mut self, code: KeyCode, game_state: &GameState) {
        if !game_state.is_playing() {
            return;
        }

        let frames = if self.reports_release {
            HELD_UNTIL_RELEASE
        } else {
            REPEAT_HOLD_FRAMES
        };

        let keys = &mut self.key_state;
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                keys.up = frames;
                keys.down = 0;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                keys.down = frames;
                keys.up = 0;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                keys.left = frames;
                keys.right = 0;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                keys.right = frames;
                keys.left = 0;
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => self.key_state.up = 0,
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => self.key_state.down = 0,
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => self.key_state.left = 0,
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => self.key_state.right = 0,
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent, game_state: &GameState, viewport: &Viewport) {
        if *game_state == GameState::Playing
            && mouse_event.kind == MouseEventKind::Down(MouseButton::Left)
        {
            let target = viewport.to_world(mouse_event.column, mouse_event.row);
            self.oneshot_actions.push(InputAction::Shoot(target));
        }
    }

    /// Hands over the one-shot actions gathered so far, in arrival order
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.oneshot_actions)
    }

    pub fn movement(&self) -> Movement {
        Movement {
            up: self.key_state.up > 0,
            down: self.key_state.down > 0,
            left: self.key_state.left > 0,
            right: self.key_state.right > 0,
        }
    }
}

use color_eyre::Result;
use crossterm::event::Event;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::Backend, layout::Rect};

use crate::clock::FrameClock;
use crate::consts::TARGET_FPS;
use crate::entities::GameState;
use crate::game::Game;
use crate::highscore::HighScoreStore;
use crate::input::{self, InputAction, InputManager};
use crate::renderer::{DisplayList, GameRenderer, Viewport};

/// The main application: owns the game and drives it one frame at a time.
pub struct App<S: HighScoreStore> {
    running: bool,
    game: Game<S>,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    display: DisplayList,
    clock: FrameClock,
    rng: ThreadRng,
}

impl<S: HighScoreStore> App<S> {
    /// Construct a new instance of [`App`].
    ///
    /// `reports_key_release` tells the input layer whether the terminal
    /// sends key release events.
    pub fn new(store: S, reports_key_release: bool) -> Self {
        Self {
            running: true,
            game: Game::new(store),
            input_manager: InputManager::new(reports_key_release),
            renderer: GameRenderer::new(),
            display: DisplayList::new(),
            clock: FrameClock::new(TARGET_FPS),
            rng: rand::rng(),
        }
    }

    /// Run the application's main loop.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        log::info!("Entering main loop at {TARGET_FPS} fps");

        while self.running {
            let events = input::read_pending_events()?;
            self.step(events, terminal)?;

            let elapsed = self.clock.tick();
            if elapsed > self.clock.frame_time() * 2 {
                log::debug!("Slow frame: {} ms", elapsed.as_millis());
            }
        }

        log::info!("Quit requested, leaving main loop");
        Ok(())
    }

    /// One frame: input, simulation, composition, presentation.
    ///
    /// Each event is applied before the next one is read, so a key that
    /// changes the screen affects the events behind it. Quitting still
    /// finishes the frame.
    pub fn step<B: Backend>(
        &mut self,
        events: impl IntoIterator<Item = Event>,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        let size = terminal.size()?;
        let viewport = Viewport::fit(
            Rect::new(0, 0, size.width, size.height),
            self.game.bounds(),
        );

        self.input_manager.begin_frame();
        for event in events {
            self.input_manager
                .handle_event(event, &self.game.state(), &viewport);
            self.process_actions();
        }

        // The frame that ends a session still shows the playfield
        let was_playing = self.game.state().is_playing();
        let movement = self.input_manager.movement();
        self.game.update(movement, &mut self.rng);

        let mut view = self.game.view();
        if was_playing {
            view.game_state = GameState::Playing;
        }
        self.display.clear();
        self.renderer.compose(&view, &mut self.display);
        terminal.draw(|frame| self.renderer.draw(frame, &viewport, &self.display))?;

        Ok(())
    }

    /// Process input actions in arrival order
    fn process_actions(&mut self) {
        for action in self.input_manager.take_actions() {
            match action {
                InputAction::Quit => self.running = false,
                action => self.game.handle_action(action),
            }
        }
    }
}

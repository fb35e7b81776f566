use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};

use circle_shooter::app::App;
use circle_shooter::consts::{HIGHSCORE_FILE, LOG_FILE};
use circle_shooter::highscore::FileHighScore;
use circle_shooter::logging;

fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(err) = logging::init(LOG_FILE) {
        eprintln!("Warning: logging disabled: {err:#}");
    }
    log::info!("Circle Shooter starting");

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::info!("Keyboard enhancement supported: {supports_keyboard_enhancement}");

    // Put the terminal back before a panic report is printed
    let panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(supports_keyboard_enhancement);
        panic_hook(info);
    }));

    let mut terminal = match setup_terminal(supports_keyboard_enhancement) {
        Ok(terminal) => terminal,
        Err(err) => {
            restore_terminal(supports_keyboard_enhancement);
            return Err(err);
        }
    };

    let store = FileHighScore::new(HIGHSCORE_FILE);
    log::info!("High score file: {}", store.path().display());
    let result = App::new(store, supports_keyboard_enhancement).run(&mut terminal);

    restore_terminal(supports_keyboard_enhancement);
    terminal.show_cursor()?;

    log::info!("Circle Shooter exiting");
    result
}

/// Raw mode, alternate screen, mouse capture and (when available) key
/// release reporting
fn setup_terminal(keyboard_enhancement: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().wrap_err("enabling raw mode")?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )
    .wrap_err("entering alternate screen")?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )
        .wrap_err("enabling keyboard enhancement")?;
    }

    Terminal::new(CrosstermBackend::new(stdout)).wrap_err("creating terminal")
}

/// Best effort: every step runs even if an earlier one fails
fn restore_terminal(keyboard_enhancement: bool) {
    let mut stdout = stdout();
    if keyboard_enhancement {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(
        stdout,
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();
}

//! High score persistence
//!
//! A single integer, stored as text. Loading never fails (anything unreadable
//! counts as no high score yet) and saving is best effort.

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the best score lives between runs
pub trait HighScoreStore {
    /// Stored high score, or 0 if there is none
    fn load(&mut self) -> u32;

    /// Replaces the stored high score
    fn save(&mut self, score: u32);
}

/// Text file holding one non-negative integer
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<u32> {
        let contents = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("reading {}", self.path.display()))?;
        contents
            .trim()
            .parse::<u32>()
            .wrap_err_with(|| format!("parsing high score {:?}", contents.trim()))
    }

    fn try_save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .wrap_err_with(|| format!("writing {}", self.path.display()))
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&mut self) -> u32 {
        match self.try_load() {
            Ok(score) => {
                log::info!("Loaded high score {score} from {}", self.path.display());
                score
            }
            Err(err) => {
                log::info!("No high score found, starting from 0 ({err:#})");
                0
            }
        }
    }

    fn save(&mut self, score: u32) {
        match self.try_save(score) {
            Ok(()) => log::info!("High score {score} saved"),
            Err(err) => log::warn!("Failed to save high score: {err:#}"),
        }
    }
}

/// In-memory store that remembers every save, for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    pub score: u32,
    pub saves: Vec<u32>,
}

impl MemoryHighScore {
    pub fn new(score: u32) -> Self {
        Self {
            score,
            saves: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&mut self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) {
        self.score = score;
        self.saves.push(score);
    }
}

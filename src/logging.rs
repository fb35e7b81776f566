//! File logging. The terminal belongs to the game, so records go to a file.

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use std::fs::File;
use std::path::Path;

/// Installs `env_logger` writing to `path`, truncating any previous log
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).wrap_err_with(|| format!("creating log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .filter_module("circle_shooter", log::LevelFilter::Debug)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .wrap_err("installing logger")?;

    Ok(())
}

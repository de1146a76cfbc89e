use std::path::PathBuf;
use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};

/// Logs to stderr, and also to `file` when one is given. `verbose` forces
/// debug output regardless of the configured level.
pub fn init_logger(level: &str, verbose: bool, file: Option<PathBuf>) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        level.parse().unwrap_or(log::LevelFilter::Info)
    };

    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                chrono::Local::now().format("[%H:%M:%S]"),
                colors.color(record.level()),
                message
            ))
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new().level(level).chain(console);

    if let Some(path) = file {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file_log = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{}[{}][{}]   {}",
                    chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                    record.target(),
                    record.level(),
                    message
                ))
            })
            .chain(fern::log_file(path)?);
        dispatch = dispatch.chain(file_log);
    }

    dispatch.apply()?;
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use std::process::exit;

use slowed_reverb::app::fetch;
use slowed_reverb::cli::FetchCli;
use slowed_reverb::model::settings::Settings;
use slowed_reverb::sys::{config::Config, deps, logging, sheet};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = FetchCli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::from_config(config);

    let log_file = settings
        .enable_logging
        .then(|| settings.log_path.clone().unwrap_or_else(Config::default_log_path));
    logging::init_logger(&settings.log_level, cli.verbose, log_file)?;

    match deps::check_downloader(settings.downloader_cmd()) {
        Ok(version) => log::info!("{} version: {}", settings.downloader_cmd(), version),
        Err(e) => {
            eprintln!("CRITICAL: {:#}", e);
            eprintln!("audio-fetch requires yt-dlp (or a compatible downloader).");
            exit(1);
        }
    }

    let rows = match cli.single_row() {
        Some(row) => vec![row],
        None => {
            let path = cli.sheet.clone().unwrap_or_else(|| settings.sheet_path());
            sheet::read_pending(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
    };
    log::info!("{} track(s) to download", rows.len());

    let report = fetch::run_downloads(&settings, rows).await;
    if !report.failed.is_empty() {
        log::warn!(
            "{} downloaded, {} failed",
            report.downloaded.len(),
            report.failed.len()
        );
    }

    Ok(())
}

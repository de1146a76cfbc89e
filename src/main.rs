use anyhow::{Context, Result};
use clap::Parser;
use std::process::exit;

use slowed_reverb::app::batch;
use slowed_reverb::cli::ProcessCli;
use slowed_reverb::model::FolderPair;
use slowed_reverb::model::settings::Settings;
use slowed_reverb::sys::{config::Config, deps, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ProcessCli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    if cli.write_config {
        let path = cli.config.clone().unwrap_or_else(Config::get_config_path);
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let settings = Settings::from_config(config);

    let log_file = settings
        .enable_logging
        .then(|| settings.log_path.clone().unwrap_or_else(Config::default_log_path));
    logging::init_logger(&settings.log_level, cli.verbose, log_file)?;

    match deps::check_ffmpeg(settings.ffmpeg_cmd()) {
        Ok(version) => log::info!("{}", version),
        Err(e) => {
            eprintln!("CRITICAL: {:#}", e);
            eprintln!("slowed-reverb requires ffmpeg for every stage.");
            exit(1);
        }
    }

    let impulse = settings.impulse_path();
    if !deps::impulse_available(&impulse) {
        log::warn!(
            "Impulse response {} not found; the reverb stage will fail.",
            impulse.display()
        );
    }

    let folders = match &cli.source {
        Some(source) => FolderPair::from_source(source),
        None => settings.default_folders(),
    };

    let report = batch::run_batch(&settings, &folders)
        .await
        .with_context(|| format!("Failed to process {}", folders.source.display()))?;

    if !report.failed.is_empty() {
        log::warn!(
            "{} created, {} failed",
            report.created.len(),
            report.failed.len()
        );
    }

    Ok(())
}

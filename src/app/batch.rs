use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::settings::Settings;
use crate::model::FolderPair;
use crate::sys::{ffmpeg, local};

#[derive(Debug, Default)]
pub struct BatchReport {
    pub created: Vec<PathBuf>,
    pub failed: Vec<(OsString, Error)>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.failed.is_empty()
    }
}

/// Runs the tempo, pitch and reverb stages for one source file, then removes
/// the intermediates. A failing stage stops the chain for this file; cleanup
/// runs either way.
pub async fn process_file(settings: &Settings, folders: &FolderPair, original: &OsStr) -> Result<PathBuf> {
    let result = run_stages(settings, folders, original).await;

    if let Err(e) = local::remove_intermediates(&folders.destination) {
        log::warn!(
            "Could not remove intermediates in {}: {}",
            folders.destination.display(),
            e
        );
    }

    result
}

async fn run_stages(settings: &Settings, folders: &FolderPair, original: &OsStr) -> Result<PathBuf> {
    let slowed = ffmpeg::slow(settings, &folders.source, original, &folders.destination).await?;
    let pitched = ffmpeg::pitch_down(settings, &slowed, &folders.destination).await?;
    ffmpeg::reverb(settings, original, &pitched, &folders.destination).await
}

pub async fn run_batch(settings: &Settings, folders: &FolderPair) -> Result<BatchReport> {
    local::ensure_folder(&folders.destination);

    let differences = local::find_differences(&folders.source, &folders.destination)?;
    log::info!(
        "{} file(s) to process in {}",
        differences.len(),
        folders.source.display()
    );

    let mut report = BatchReport::default();
    for original in differences {
        match process_file(settings, folders, &original).await {
            Ok(output) => {
                let name = output
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                println!("We've created {}", name);
                report.created.push(output);
            }
            Err(e) => {
                log::error!("Skipping {}: {}", original.to_string_lossy(), e);
                report.failed.push((original, e));
            }
        }
    }
    Ok(report)
}

use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;

use crate::error::Result;
use crate::model::Stage;
use crate::model::download::DownloadRow;
use crate::model::settings::Settings;
use crate::sys::process::run_inherited;

pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

pub fn download_args(link: &str, download_dir: &Path) -> Vec<OsString> {
    vec![
        "-x".into(),
        "--audio-format".into(),
        "mp3".into(),
        "-P".into(),
        download_dir.into(),
        "-o".into(),
        OUTPUT_TEMPLATE.into(),
        link.into(),
    ]
}

pub async fn download_audio(settings: &Settings, row: &DownloadRow, download_dir: &Path) -> Result<()> {
    let mut cmd = Command::new(settings.downloader_cmd());
    cmd.args(download_args(&row.link, download_dir));

    log::info!(
        "Starting download for {} by {} (URL: {})",
        row.title,
        row.author,
        row.link
    );

    run_inherited(Stage::Download, cmd).await
}

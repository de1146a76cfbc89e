use crate::error::Error;
use crate::model::download::DownloadRow;
use crate::model::settings::Settings;
use crate::sys::{download, local};

#[derive(Debug, Default)]
pub struct FetchReport {
    pub downloaded: Vec<DownloadRow>,
    pub failed: Vec<(DownloadRow, Error)>,
}

pub async fn run_downloads(settings: &Settings, rows: Vec<DownloadRow>) -> FetchReport {
    let download_dir = settings.download_dir();
    let mut report = FetchReport::default();

    for row in rows {
        local::ensure_folder(&download_dir);
        match download::download_audio(settings, &row, &download_dir).await {
            Ok(()) => {
                log::info!("Downloaded {} by {}", row.title, row.author);
                report.downloaded.push(row);
            }
            Err(e) => {
                log::error!("Failed to download {} ({}): {}", row.title, row.link, e);
                report.failed.push((row, e));
            }
        }
    }
    report
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::model::Stage;
    use chrono::NaiveDate;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Stands in for yt-dlp: writes a file named after the link into the -P
    /// folder, or fails for links containing "broken".
    const FAKE_DOWNLOADER: &str = "#!/bin/sh\n\
        for last; do :; done\n\
        case \"$last\" in *broken*) exit 2;; esac\n\
        : > \"$5/$(basename \"$last\").mp3\"\n";

    fn settings_in(root: &TempDir) -> Settings {
        let tool = root.path().join("yt-dlp");
        fs::write(&tool, FAKE_DOWNLOADER).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        Settings {
            downloader_path: tool.to_string_lossy().to_string(),
            work_dir: root.path().to_path_buf(),
            today: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            ..Settings::default()
        }
    }

    fn row(title: &str, link: &str) -> DownloadRow {
        DownloadRow::single(title.to_string(), "someone".to_string(), link.to_string())
    }

    #[tokio::test]
    async fn downloads_into_dated_folder() {
        let root = TempDir::new().unwrap();
        let settings = settings_in(&root);

        let report = run_downloads(&settings, vec![row("A", "https://example.com/a")]).await;

        assert_eq!(report.downloaded.len(), 1);
        assert!(report.failed.is_empty());
        assert!(root.path().join("2024-03-09").join("a.mp3").is_file());
    }

    #[tokio::test]
    async fn failed_row_does_not_stop_the_batch() {
        let root = TempDir::new().unwrap();
        let settings = settings_in(&root);

        let report = run_downloads(
            &settings,
            vec![
                row("Bad", "https://example.com/broken"),
                row("Good", "https://example.com/good"),
            ],
        )
        .await;

        assert_eq!(report.downloaded, vec![row("Good", "https://example.com/good")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].1.stage(), Some(Stage::Download));
        assert!(root.path().join("2024-03-09").join("good.mp3").is_file());
    }

    #[tokio::test]
    async fn no_rows_creates_nothing() {
        let root = TempDir::new().unwrap();
        let settings = settings_in(&root);

        let report = run_downloads(&settings, Vec::new()).await;

        assert!(report.downloaded.is_empty());
        assert!(!root.path().join("2024-03-09").exists());
    }
}

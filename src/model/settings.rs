use crate::model::{FolderPair, ImpulseChoice};
use crate::sys::config::Config;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct Settings {
    pub ffmpeg_path: String,
    pub downloader_path: String,

    pub tempo: f64,
    pub reverb: ImpulseChoice,
    pub weights: u32,
    pub asset_dir: PathBuf,

    pub work_dir: PathBuf,
    pub today: NaiveDate,

    pub enable_logging: bool,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            downloader_path: "yt-dlp".to_string(),
            tempo: 0.93,
            reverb: ImpulseChoice::default(),
            weights: 10,
            asset_dir: PathBuf::from("."),
            work_dir: PathBuf::from("."),
            today: chrono::Local::now().date_naive(),
            enable_logging: false,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_config(config: Config) -> Self {
        let mut settings = Self::default();

        if let Some(p) = config.executables.ffmpeg {
            settings.ffmpeg_path = Config::expand_tilde(&p).to_string_lossy().to_string();
        }
        if let Some(p) = config.executables.downloader {
            settings.downloader_path = Config::expand_tilde(&p).to_string_lossy().to_string();
        }

        settings.tempo = config.effects.tempo;
        settings.reverb = config.effects.reverb;
        settings.weights = config.effects.weights;
        if let Some(dir) = config.effects.asset_dir {
            settings.asset_dir = Config::expand_tilde(&dir);
        }

        settings.enable_logging = config.logging.enabled;
        settings.log_path = config.logging.path;
        settings.log_level = config.logging.level;

        settings
    }

    pub fn ffmpeg_cmd(&self) -> &str {
        &self.ffmpeg_path
    }

    pub fn downloader_cmd(&self) -> &str {
        &self.downloader_path
    }

    pub fn date_stamp(&self) -> String {
        self.today.format(DATE_FORMAT).to_string()
    }

    pub fn default_folders(&self) -> FolderPair {
        FolderPair::from_source(self.date_stamp())
    }

    pub fn impulse_path(&self) -> PathBuf {
        self.asset_dir.join(self.reverb.file_name())
    }

    pub fn download_dir(&self) -> PathBuf {
        self.work_dir.join(self.date_stamp())
    }

    pub fn sheet_path(&self) -> PathBuf {
        self.work_dir
            .join(format!("{}-audio - Sheet1.csv", self.date_stamp()))
    }
}

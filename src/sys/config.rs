use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ImpulseChoice;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub executables: ExecutablesConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutablesConfig {
    pub ffmpeg: Option<String>,
    pub downloader: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "default_tempo")]
    pub tempo: f64,
    #[serde(default)]
    pub reverb: ImpulseChoice,
    #[serde(default = "default_weights")]
    pub weights: u32,
    pub asset_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    pub path: Option<PathBuf>,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_tempo() -> f64 { 0.93 }
fn default_weights() -> u32 { 10 }
fn default_level() -> String { "info".to_string() }

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            tempo: default_tempo(),
            reverb: ImpulseChoice::default(),
            weights: default_weights(),
            asset_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: None,
            level: default_level(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        ProjectDirs::from("com", "slowed-reverb", "slowed-reverb")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).unwrap_or_else(|_| ".".to_string());
                Path::new(&home).join(".slowed-reverb").join("config.toml")
            })
    }

    pub fn default_log_path() -> PathBuf {
        ProjectDirs::from("com", "slowed-reverb", "slowed-reverb")
            .map(|proj_dirs| proj_dirs.data_local_dir().join("slowed-reverb.log"))
            .unwrap_or_else(|| PathBuf::from("slowed-reverb.log"))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::get_config_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::from("# slowed-reverb configuration\n\n");

        content.push_str("[executables]\n");
        content.push_str("# Paths to the external tools. Leave unset to look them up in PATH.\n");
        if let Some(ffmpeg) = &self.executables.ffmpeg {
            content.push_str(&format!("ffmpeg = {}\n", toml::Value::from(ffmpeg.as_str())));
        } else {
            content.push_str("# ffmpeg = \"/usr/bin/ffmpeg\"\n");
        }
        if let Some(downloader) = &self.executables.downloader {
            content.push_str(&format!("downloader = {}\n", toml::Value::from(downloader.as_str())));
        } else {
            content.push_str("# downloader = \"~/.local/bin/yt-dlp\"\n");
        }

        content.push_str("\n[effects]\n");
        content.push_str("# Fraction of the original speed for the tempo stage (below 1.0 is slower).\n");
        content.push_str(&format!("tempo = {}\n", toml::Value::from(self.effects.tempo)));
        content.push_str("# Impulse response used for the reverb: \"small\" or \"large\".\n");
        content.push_str(&format!("reverb = \"{}\"\n", self.effects.reverb));
        content.push_str("# Parts of dry signal mixed against one part reverb.\n");
        content.push_str(&format!("weights = {}\n", self.effects.weights));
        content.push_str("# Folder holding fart_reverb.mp3 and fart_reverb2.mp3. Defaults to the working directory.\n");
        if let Some(dir) = &self.effects.asset_dir {
            content.push_str(&format!("asset_dir = {}\n", toml::Value::from(dir.as_str())));
        } else {
            content.push_str("# asset_dir = \"~/impulses\"\n");
        }

        content.push_str("\n[logging]\n");
        content.push_str("# Also write logs to a file.\n");
        content.push_str(&format!("enabled = {}\n", self.logging.enabled));
        if let Some(log_path) = &self.logging.path {
            content.push_str(&format!(
                "path = {}\n",
                toml::Value::from(log_path.to_string_lossy().as_ref())
            ));
        }
        content.push_str(&format!("level = {}\n", toml::Value::from(self.logging.level.as_str())));

        fs::write(path, content)?;
        Ok(())
    }

    pub fn expand_tilde(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(dirs) = BaseDirs::new() {
                return dirs.home_dir().join(rest);
            }
        }
        PathBuf::from(path)
    }
}

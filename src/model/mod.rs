use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

pub mod download;
pub mod settings;

pub const MARKER_PREFIX: &str = "SaR_";
pub const DESTINATION_SUFFIX: &str = "SaR";
pub const OUTPUT_EXTENSION: &str = "mp3";

pub const SLOWED_INTERMEDIATE: &str = "slowed.mp3";
pub const PITCHED_INTERMEDIATE: &str = "slowed_and_pitched_down.mp3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Tempo,
    Pitch,
    Reverb,
    Download,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Tempo => "tempo",
            Stage::Pitch => "pitch",
            Stage::Reverb => "reverb",
            Stage::Download => "download",
        };
        f.write_str(name)
    }
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ImpulseChoice {
    Small,
    #[default]
    Large,
}

impl ImpulseChoice {
    pub fn file_name(self) -> &'static str {
        match self {
            ImpulseChoice::Small => "fart_reverb.mp3",
            ImpulseChoice::Large => "fart_reverb2.mp3",
        }
    }
}

impl fmt::Display for ImpulseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpulseChoice::Small => f.write_str("small"),
            ImpulseChoice::Large => f.write_str("large"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderPair {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl FolderPair {
    /// The destination is the source path with `SaR` appended to its last
    /// component, so `2024-05-01` pairs with `2024-05-01SaR`.
    pub fn from_source(source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        let mut destination = source.clone().into_os_string();
        destination.push(DESTINATION_SUFFIX);
        Self {
            source,
            destination: PathBuf::from(destination),
        }
    }
}

/// Name of the final processed file for a source entry: a trailing `.mp3` is
/// replaced, any other extension is kept in the name, so `song.mp3` and
/// `song.wav` map to `SaR_song.mp3` and `SaR_song.wav.mp3`.
pub fn output_name(original: &OsStr) -> OsString {
    let path = Path::new(original);
    let base = match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if ext == OUTPUT_EXTENSION => stem,
        _ => original,
    };
    let mut name = OsString::from(MARKER_PREFIX);
    name.push(base);
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    name
}

pub fn strip_marker(name: &OsStr) -> &[u8] {
    let bytes = name.as_encoded_bytes();
    bytes.strip_prefix(MARKER_PREFIX.as_bytes()).unwrap_or(bytes)
}

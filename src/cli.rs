use clap::Parser;
use std::path::PathBuf;

use crate::model::ImpulseChoice;
use crate::model::download::DownloadRow;
use crate::sys::config::Config;

#[derive(Parser, Debug)]
#[command(name = "slowed-reverb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(help_template = "NAME:
   {name} - Slowed + reverb batch converter

USAGE:
   slowed-reverb [source folder] [options]

VERSION:
   {version}

DESCRIPTION:
   {name} runs every audio file in the source folder through ffmpeg
   (tempo, pitch and reverb) and writes SaR_<name>.mp3 into <source>SaR.
   Files that already have a SaR_ counterpart are skipped, so re-running
   only picks up new files. The source folder defaults to today's date.

OPTIONS:
{options}
")]
pub struct ProcessCli {
    /// Folder holding the audio to convert (default: today's date, YYYY-MM-DD)
    pub source: Option<PathBuf>,

    /// Fraction of the original speed for the tempo stage
    #[arg(long)]
    pub tempo: Option<f64>,

    /// Impulse response for the reverb stage
    #[arg(long, value_enum)]
    pub reverb: Option<ImpulseChoice>,

    /// Parts of dry signal mixed against one part reverb
    #[arg(long)]
    pub weights: Option<u32>,

    /// Config file to use instead of the standard location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the current configuration to the config file and exit
    #[arg(long)]
    pub write_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ProcessCli {
    // Overrides land in the config so --write-config saves them.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(tempo) = self.tempo {
            config.effects.tempo = tempo;
        }
        if let Some(reverb) = self.reverb {
            config.effects.reverb = reverb;
        }
        if let Some(weights) = self.weights {
            config.effects.weights = weights;
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "audio-fetch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Download audio tracks with yt-dlp into a folder named after today's date")]
#[command(long_about = "Download audio tracks with yt-dlp into a folder named after today's date.\n\n\
    With TITLE AUTHOR LINK, downloads that single track. Without them, reads\n\
    \"<today>-audio - Sheet1.csv\" from the working directory and downloads every\n\
    row whose hasBeenDownloaded column is No.")]
pub struct FetchCli {
    /// Song title (single-track mode)
    #[arg(requires_all = ["author", "link"])]
    pub title: Option<String>,

    /// Song author (single-track mode)
    #[arg(requires = "title")]
    pub author: Option<String>,

    /// Video link (single-track mode)
    #[arg(requires = "title")]
    pub link: Option<String>,

    /// Spreadsheet to read instead of today's default
    #[arg(long, conflicts_with = "title")]
    pub sheet: Option<PathBuf>,

    /// Config file to use instead of the standard location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl FetchCli {
    /// The row given on the command line, if any.
    pub fn single_row(&self) -> Option<DownloadRow> {
        match (&self.title, &self.author, &self.link) {
            (Some(title), Some(author), Some(link)) => {
                Some(DownloadRow::single(title.clone(), author.clone(), link.clone()))
            }
            _ => None,
        }
    }
}

//! The three ffmpeg invocations that turn a source track into its slowed and
//! reverbed variant.
//!
//! Argument lists are built separately from running them so the exact
//! command line for each stage can be inspected without ffmpeg installed.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::error::Result;
use crate::model::settings::Settings;
use crate::model::{self, PITCHED_INTERMEDIATE, SLOWED_INTERMEDIATE, Stage};
use crate::sys::process::run_captured;

pub const PITCH_SAMPLE_RATE: u32 = 44100;
pub const PITCH_RATE_FACTOR: f64 = 0.8;
pub const PITCH_TEMPO_FACTOR: f64 = 1.4;

const COMMON_ARGS: [&str; 2] = ["-hide_banner", "-y"];

pub fn tempo_args(source: &Path, destination: &Path, tempo: f64) -> Vec<OsString> {
    let mut args: Vec<OsString> = COMMON_ARGS.iter().map(OsString::from).collect();
    args.push("-i".into());
    args.push(source.into());
    args.push("-filter:a".into());
    args.push(format!("atempo={}", tempo).into());
    args.push("-vn".into());
    args.push(destination.into());
    args
}

pub fn pitch_args(input: &Path, destination: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = COMMON_ARGS.iter().map(OsString::from).collect();
    args.push("-i".into());
    args.push(input.into());
    args.push("-af".into());
    args.push(
        format!(
            "asetrate={rate}*{factor},atempo={tempo},aresample={rate}",
            rate = PITCH_SAMPLE_RATE,
            factor = PITCH_RATE_FACTOR,
            tempo = PITCH_TEMPO_FACTOR,
        )
        .into(),
    );
    args.push(destination.into());
    args
}

pub fn reverb_args(input: &Path, impulse: &Path, destination: &Path, weights: u32) -> Vec<OsString> {
    let mut args: Vec<OsString> = COMMON_ARGS.iter().map(OsString::from).collect();
    args.push("-i".into());
    args.push(input.into());
    args.push("-i".into());
    args.push(impulse.into());
    args.push("-filter_complex".into());
    args.push(
        format!(
            "[0] [1] afir=dry=10:wet=10 [reverb]; [0] [reverb] amix=inputs=2:weights={} 1",
            weights
        )
        .into(),
    );
    args.push(destination.into());
    args
}

fn ffmpeg(settings: &Settings, args: Vec<OsString>) -> Command {
    let mut cmd = Command::new(settings.ffmpeg_cmd());
    cmd.args(args);
    cmd
}

pub async fn slow(
    settings: &Settings,
    source_folder: &Path,
    original: &OsStr,
    destination_folder: &Path,
) -> Result<PathBuf> {
    let output = destination_folder.join(SLOWED_INTERMEDIATE);
    let args = tempo_args(&source_folder.join(original), &output, settings.tempo);
    run_captured(Stage::Tempo, ffmpeg(settings, args)).await?;
    Ok(output)
}

pub async fn pitch_down(settings: &Settings, slowed: &Path, destination_folder: &Path) -> Result<PathBuf> {
    let output = destination_folder.join(PITCHED_INTERMEDIATE);
    let args = pitch_args(slowed, &output);
    run_captured(Stage::Pitch, ffmpeg(settings, args)).await?;
    Ok(output)
}

pub async fn reverb(
    settings: &Settings,
    original: &OsStr,
    pitched: &Path,
    destination_folder: &Path,
) -> Result<PathBuf> {
    let output = destination_folder.join(model::output_name(original));
    let args = reverb_args(pitched, &settings.impulse_path(), &output, settings.weights);
    run_captured(Stage::Reverb, ffmpeg(settings, args)).await?;
    Ok(output)
}

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

pub fn check_tool(program: &str, version_flag: &str) -> Result<String> {
    let output = Command::new(program)
        .arg(version_flag)
        .output()
        .with_context(|| format!("Failed to execute {}. Is it installed and in your PATH?", program))?;

    if !output.status.success() {
        bail!("{} command failed with status: {}", program, output.status);
    }

    let version_str = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    Ok(version_str)
}

pub fn check_ffmpeg(program: &str) -> Result<String> {
    check_tool(program, "-version")
}

pub fn check_downloader(program: &str) -> Result<String> {
    check_tool(program, "--version")
}

pub fn impulse_available(path: &Path) -> bool {
    path.is_file()
}

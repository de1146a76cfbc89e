use crate::error::{Error, Result};
use crate::model::Stage;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Runs a tool with its output captured, for chatty tools whose output only
/// matters when they fail. Stdin is closed so the tool can never wait on a
/// prompt.
pub async fn run_captured(stage: Stage, mut cmd: Command) -> Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    log::debug!("{} command: {:?}", stage, cmd);

    let output = cmd.output().await.map_err(|e| spawn_error(&cmd, e))?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    check_status(stage, output.status, last_line(&stderr))
}

pub async fn run_inherited(stage: Stage, mut cmd: Command) -> Result<()> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    log::debug!("{} command: {:?}", stage, cmd);

    let status = cmd.status().await.map_err(|e| spawn_error(&cmd, e))?;
    check_status(stage, status, None)
}

fn check_status(stage: Stage, status: ExitStatus, detail: Option<String>) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    Err(Error::ExternalTool {
        stage,
        code: status.code(),
        detail,
    })
}

fn spawn_error(cmd: &Command, source: std::io::Error) -> Error {
    let program = cmd.as_std().get_program().to_string_lossy().to_string();
    log::error!("Failed to spawn {}: {}", program, source);
    Error::Spawn { program, source }
}

fn last_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .map(str::to_string)
}

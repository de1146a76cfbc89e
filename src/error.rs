//! Error types for folder processing and downloads.

use crate::model::Stage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tool ran but did not exit successfully. `code` is `None` when the
    /// process was killed by a signal.
    #[error("{stage} stage failed (exit code {}){}", display_code(.code), display_detail(.detail))]
    ExternalTool {
        stage: Stage,
        code: Option<i32>,
        detail: Option<String>,
    },

    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::ExternalTool { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

fn display_detail(detail: &Option<String>) -> String {
    match detail {
        Some(line) => format!(": {}", line),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_tool_message() {
        let err = Error::ExternalTool {
            stage: Stage::Pitch,
            code: Some(1),
            detail: Some("No such file or directory".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "pitch stage failed (exit code 1): No such file or directory"
        );
        assert_eq!(err.stage(), Some(Stage::Pitch));

        let killed = Error::ExternalTool {
            stage: Stage::Download,
            code: None,
            detail: None,
        };
        assert_eq!(killed.to_string(), "download stage failed (exit code none)");
    }
}

// Common error types for dirbot

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirbotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to serialize JSON output: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DirbotError>;

/// User-facing rendering of a `DirbotError` with a process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    pub fn from_dirbot_error(err: &DirbotError) -> Self {
        match err {
            DirbotError::IoError(io) => Self {
                message: format!("Filesystem operation failed: {io}"),
                hint: match io.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check that the working root is writable.".to_string())
                    }
                    _ => None,
                },
                exit_code: 1,
            },
            DirbotError::ConfigError(msg) => Self {
                message: format!("Invalid configuration: {msg}"),
                hint: Some("Fix dirbot.toml or pass --config <FILE>.".to_string()),
                exit_code: 2,
            },
            DirbotError::NotADirectory(path) => Self {
                message: format!("Cannot create folder, a file is in the way: {}", path.display()),
                hint: Some("Remove or rename the file and run again.".to_string()),
                exit_code: 1,
            },
            DirbotError::SerializationError(err) => Self {
                message: format!("Could not render JSON output: {err}"),
                hint: Some("Run again without --json.".to_string()),
                exit_code: 1,
            },
        }
    }

    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("\n{hint}");
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MernkitError {
    #[error("invalid name '{0}': names must be non-empty and contain only letters, digits, '.', '_' or '-'")]
    InvalidName(String),

    #[error("project already exists: {}", .0.display())]
    ProjectExists(PathBuf),

    #[error("'{0}' not found on PATH: install it before scaffolding")]
    ToolMissing(String),

    #[error("external tool failed: {program}: {detail}")]
    ToolFailed { program: String, detail: String },

    #[error("manifest is not a JSON object: {}", .0.display())]
    ManifestShape(PathBuf),

    #[error("filesystem operation failed on {}: {source}", .path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MernkitError>;

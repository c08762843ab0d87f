use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse project data: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("could not encode projects as TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("could not encode projects as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{origin} points at a data file that does not exist: {}", .path.display())]
    MissingDataFile { origin: &'static str, path: PathBuf },

    #[error("unsupported schema_version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },

    #[error("project #{index}: invalid `{field}` {value:?}: {reason}")]
    Invalid {
        index: usize,
        field: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ProjectError>;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EquiviewError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Insufficient data: dataset contains no rows")]
    InsufficientData,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EquiviewError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

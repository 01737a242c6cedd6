use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Path is not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("File too large: {size} bytes (max: {limit})")]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Invalid path")]
    UnsafePath { path: String },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid line range: {start}..{end}")]
    InvalidRange { start: usize, end: usize },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CompassError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

//! Crate-wide error type
//!
//! Game over is a state, not an error. Only backend I/O and bad configuration land here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or other backend I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read settings from {}: {source}", path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, Error>;

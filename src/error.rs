use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while locating or scanning Chrome data.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The running platform has no known Chrome data location.
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The current user's home directory could not be determined.
    #[error("home directory could not be determined")]
    NoHomeDir,

    /// A file could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not valid JSON.
    #[error("failed to parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

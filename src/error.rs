//! Error types for tutorial metadata extraction

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Errors raised while scanning a tutorial tree
#[derive(Error, Debug)]
pub enum TutorialMetaError {
    /// The root given on the command line is missing or not a directory
    #[error("invalid root directory: '{path}'")]
    InvalidRootPath { path: String },

    /// A file could not be read (permissions, invalid UTF-8, binary content)
    #[error("cannot read {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized
    #[error("failed to serialize report: {0}")]
    Output(#[from] serde_json::Error),
}

impl TutorialMetaError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidRootPath { .. } | Self::UnreadableFile { .. } => ExitCode::from(1),
            Self::Output(_) => ExitCode::from(3),
        }
    }

    /// Whether the scan may carry on past this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnreadableFile { .. })
    }
}

pub type Result<T> = std::result::Result<T, TutorialMetaError>;

use std::{io::Error as IoError, path::PathBuf};

use thiserror::Error as ThisError;

/// Every way a generation run can fail. All of them are terminal.
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum GenerateError {
    /// Positional arguments after `--` are missing or malformed.
    #[error("Invalid Arguments. {reason}")]
    InvalidArguments { reason: String },

    /// The file could not be opened or parsed at all.
    #[error("Failed to read path '{}'.", path.display())]
    ReadError { path: PathBuf },

    /// The property list parsed but is not a flat string-to-string dictionary.
    #[error("Invalid contents in path '{}'.", path.display())]
    InvalidContents { path: PathBuf },

    /// The sidecar settings file is not valid.
    #[error("Invalid settings in path '{}': {message}", path.display())]
    InvalidSettings { path: PathBuf, message: String },

    /// The generated file could not be written.
    #[error("Failed to write path '{}'.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// No source directory override and no home directory.
    #[error("Could not determine the home directory; set PLIST2SWIFT_SOURCE_DIR.")]
    HomeDirectoryUnavailable,
}

/// Shorthand for `Result<T, GenerateError>`.
pub type GenerateResult<T> = Result<T, GenerateError>;

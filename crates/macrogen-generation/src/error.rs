//! Error types for macro generation

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a generation run
///
/// Unknown modifiers and empty macro values are deliberately absent: they
/// leave the token text in the output instead of stopping the run.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Template directory missing, output directory not creatable, etc.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A resolved path is not inside the root it must live under
    #[error("Path {} is outside of {}", path.display(), root.display())]
    PathOutsideRoot {
        /// Offending path after normalization
        path: PathBuf,
        /// Root the path was required to stay within
        root: PathBuf,
    },

    /// A template has a missing/malformed header or an empty body
    #[error("Invalid template {}: {message}", template.display())]
    TemplateFormat {
        /// Path of the offending template file
        template: PathBuf,
        /// What is wrong with it
        message: String,
    },

    /// Batch-valued macros disagree on the number of entries
    #[error(
        "Batch length mismatch for macro {identifier}: expected {expected} values, found {found}"
    )]
    BatchLengthMismatch {
        /// Identifier whose list length disagrees with the first batch macro
        identifier: String,
        /// Length established by the first batch macro
        expected: usize,
        /// Length of the offending macro
        found: usize,
    },

    /// Reading a template file failed, including non-UTF-8 contents
    #[error("Failed to read template {}: {source}", path.display())]
    ReadFailed {
        /// Template that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Writing a generated file failed
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

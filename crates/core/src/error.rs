//! Error types for catalog reading, installation and prompting.

use std::path::PathBuf;

/// Result type for fontcopy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The font source directory could not be listed.
    #[error("Failed to read font directory '{path}': {source}")]
    ReadCatalog {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The install target directory could not be created.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A font file could not be copied into the target directory.
    #[error("Failed to copy font '{from}' to '{to}': {source}")]
    CopyFont {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// The prompt backend failed or was cancelled.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Writing user-facing output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

//! Unified error types for the svg2sol toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during svg2sol operations.
///
/// The runtime taxonomy is deliberately small: embedding is a single
/// read-render-write pass, so I/O failure is the only error class that can
/// occur outside of configuration loading. There is no retry and no
/// recovery; every variant aborts the run and surfaces the underlying
/// message unmodified.
#[derive(Error, Debug)]
pub enum EmbedError {
    // --- Configuration ---

    /// The project config file (`svg2sol.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project config file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Embedding ---

    /// The payload file could not be read. There is no fallback payload.
    #[error("payload file not readable: {path}")]
    PayloadNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the generated Solidity source failed (permission denied,
    /// disk full, unwritable directory).
    #[error("failed to write generated source at {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Project ---

    /// Attempted to create a project in a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, EmbedError>`.
pub type Result<T> = std::result::Result<T, EmbedError>;

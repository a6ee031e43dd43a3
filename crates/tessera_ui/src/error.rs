//! # UI Error Types
//!
//! Frame-time failures are fatal by contract and never surface here; the only
//! recoverable errors come from loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`Style`](crate::Style).
#[derive(Error, Debug)]
pub enum StyleError {
    /// The style file could not be read.
    #[error("failed to read style file {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The style document is not valid TOML for a style.
    #[error("invalid style document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for style loading.
pub type StyleResult<T> = Result<T, StyleError>;

//! Error types for line-sticker-dl
//!
//! Failures are split by how far they reach:
//! - [`Error`] aborts a whole run (bad config, metadata request, invalid pack, output setup)
//! - [`ValidationError`] explains why a metadata document is not a usable sticker pack
//! - [`DownloadError`] belongs to a single sticker and never aborts the run

use crate::types::StickerId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for line-sticker-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for line-sticker-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "max_concurrent_downloads")
        key: Option<String>,
    },

    /// The metadata endpoint answered with a status other than 200
    #[error("metadata request failed with HTTP {status} ({url})")]
    MetadataStatus {
        /// Numeric HTTP status code
        status: u16,
        /// The metadata URL that was requested
        url: String,
    },

    /// The metadata document does not describe a valid sticker pack
    #[error("invalid sticker pack: {0}")]
    InvalidPack(#[from] ValidationError),

    /// The per-pack output directory could not be created
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a metadata document cannot be turned into a sticker pack
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The document has no `packageId`
    #[error("document has no packageId, this is not a LINE sticker pack")]
    NotAPack,

    /// A required field is absent
    #[error("missing required field `{field}`")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// A localized field has neither a non-empty `en` nor `ja` entry
    #[error("field `{field}` has no `en` or `ja` localization")]
    MissingLocalization {
        /// Name of the localized field (`title` or `author`)
        field: &'static str,
    },

    /// A sticker entry has no `id`
    #[error("sticker at index {index} has no id, this is not a LINE sticker")]
    InvalidSticker {
        /// Position of the entry in the `stickers` array
        index: usize,
    },
}

/// Per-sticker download failures
///
/// These are recorded in the run summary and reported as events; the remaining
/// stickers are still attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// The image endpoint answered with a status other than 200
    #[error("sticker {sticker_id} returned HTTP {status}")]
    HttpStatus {
        /// Sticker that failed
        sticker_id: StickerId,
        /// Numeric HTTP status code
        status: u16,
    },

    /// The request could not be sent or the body could not be read
    #[error("request for sticker {sticker_id} failed: {reason}")]
    Request {
        /// Sticker that failed
        sticker_id: StickerId,
        /// Transport error text
        reason: String,
    },

    /// The image could not be written to disk
    #[error("failed to write {}: {reason}", .path.display())]
    Write {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error text
        reason: String,
    },
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub(crate) fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }
}

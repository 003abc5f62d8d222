//! Core types for line-sticker-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pack::StickerPack;

/// Store identifier of a sticker pack
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub u64);

impl PackageId {
    /// Get the inner u64 value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PackageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PackageId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Identifier of a single sticker within the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StickerId(pub u64);

impl StickerId {
    /// Get the inner u64 value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for StickerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StickerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two image resources is fetched for a sticker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Static PNG
    #[default]
    Static,
    /// Animated PNG (APNG)
    Animated,
}

impl AssetKind {
    /// Animated only when the pack declares animation and the caller did not force static mode
    pub fn for_pack(animated: bool, static_only: bool) -> Self {
        if animated && !static_only {
            AssetKind::Animated
        } else {
            AssetKind::Static
        }
    }
}

/// Events emitted while a pack is downloaded
///
/// Subscribers receive these through [`StickerDownloader::subscribe`](crate::StickerDownloader::subscribe).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Metadata fetched and validated
    MetadataFetched {
        /// Pack identifier
        package_id: PackageId,
        /// Resolved title
        title: String,
        /// Resolved author
        author: String,
        /// Number of stickers in the pack
        sticker_count: usize,
        /// Which image resource will be fetched
        asset_kind: AssetKind,
    },

    /// A sticker download is starting
    Downloading {
        /// Sticker identifier
        sticker_id: StickerId,
        /// 1-based position in the pack
        index: usize,
        /// Total number of stickers
        total: usize,
    },

    /// A sticker image was written to disk
    Downloaded {
        /// Sticker identifier
        sticker_id: StickerId,
        /// File that was written
        path: PathBuf,
        /// Number of bytes written
        bytes: u64,
    },

    /// A sticker was left alone because its file already exists
    Skipped {
        /// Sticker identifier
        sticker_id: StickerId,
        /// Existing file
        path: PathBuf,
    },

    /// A sticker could not be downloaded (the run continues)
    DownloadFailed {
        /// Sticker identifier
        sticker_id: StickerId,
        /// Error message
        error: String,
    },

    /// `info.txt` and `info.json` were written
    ReportWritten {
        /// Path of the summary file
        path: PathBuf,
    },

    /// The run finished
    Complete {
        /// Pack identifier
        package_id: PackageId,
        /// Output directory of the pack
        path: PathBuf,
        /// Number of stickers saved or skipped
        succeeded: usize,
        /// Number of stickers that failed
        failed: usize,
    },
}

/// Result of one sticker download
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StickerOutcome {
    /// Image written to the given file
    Saved(PathBuf),
    /// File already existed and `skip_existing` was set
    Skipped(PathBuf),
    /// Download failed with the given error text
    Failed(String),
}

impl StickerOutcome {
    /// Whether the sticker ended up on disk
    pub fn is_success(&self) -> bool {
        !matches!(self, StickerOutcome::Failed(_))
    }
}

/// Summary of a completed run
#[derive(Clone, Debug)]
pub struct DownloadSummary {
    /// The validated pack
    pub pack: StickerPack,
    /// Image resource that was fetched
    pub asset_kind: AssetKind,
    /// Per-pack output directory
    pub output_dir: PathBuf,
    /// One outcome per sticker, in pack order
    pub outcomes: Vec<StickerOutcome>,
}

impl DownloadSummary {
    /// Number of stickers saved or skipped
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of stickers that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

//! # line-sticker-dl
//!
//! Downloads LINE sticker packs from the public sticker store.
//!
//! A run fetches the pack's metadata document, validates it into a
//! [`StickerPack`], downloads every sticker image (animated APNGs when the pack
//! has them, static PNGs otherwise) and finishes with a short `info.txt`
//! summary plus the verbatim `info.json` metadata.
//!
//! ## Quick Start
//!
//! ```no_run
//! use line_sticker_dl::{Config, PackageId, StickerDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloader = StickerDownloader::new(Config::default())?;
//!
//!     // Subscribe to events
//!     let mut events = downloader.subscribe();
//!     tokio::spawn(async move {
//!         while let Ok(event) = events.recv().await {
//!             println!("Event: {:?}", event);
//!         }
//!     });
//!
//!     let summary = downloader.download_pack(PackageId(12345)).await?;
//!     println!("{} saved, {} failed", summary.succeeded(), summary.failed());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Pack download pipeline
pub mod downloader;
/// Error types
pub mod error;
/// Sticker pack records
pub mod pack;
/// Core types and events
pub mod types;

// Re-export commonly used types
pub use config::{Config, EndpointConfig};
pub use downloader::{MetadataDocument, StickerDownloader};
pub use error::{DownloadError, Error, Result, ValidationError};
pub use pack::{Sticker, StickerPack};
pub use types::{AssetKind, DownloadSummary, Event, PackageId, StickerId, StickerOutcome};

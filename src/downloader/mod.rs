//! Sticker pack downloader split into focused submodules.
//!
//! A run is a strict sequence of stages, each in its own module:
//! - [`metadata`] - Fetch the pack's metadata document
//! - [`assets`] - Download every sticker image into the pack directory
//! - [`report`] - Write `info.txt` and the verbatim `info.json`

mod assets;
mod metadata;
mod report;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

pub use metadata::MetadataDocument;
pub use report::{INFO_JSON_FILE, INFO_TXT_FILE, render_report};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pack::StickerPack;
use crate::types::{DownloadSummary, Event, PackageId};
use std::sync::Arc;

/// Main downloader instance (cloneable - all fields are cheap to clone)
#[derive(Clone)]
pub struct StickerDownloader {
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: Arc<Config>,
    /// Shared HTTP client for metadata and image requests
    pub(crate) http_client: reqwest::Client,
    /// Event broadcast channel sender (multiple subscribers supported)
    pub(crate) event_tx: tokio::sync::broadcast::Sender<Event>,
}

impl StickerDownloader {
    /// Create a new StickerDownloader instance
    ///
    /// Validates the configuration and builds the HTTP client. Nothing touches
    /// the network or the filesystem until [`download_pack`](Self::download_pack).
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        // Buffer large enough that a slow subscriber does not lag on big packs
        let (event_tx, _rx) = tokio::sync::broadcast::channel(1000);

        Ok(Self {
            config: Arc::new(config),
            http_client,
            event_tx,
        })
    }

    /// Subscribe to progress events
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn emit(&self, event: Event) {
        // No subscribers is fine
        self.event_tx.send(event).ok();
    }

    /// Download a whole sticker pack
    ///
    /// Runs fetch → validate → create directory → download stickers → write
    /// report. Metadata, validation, directory and report failures abort the
    /// run; individual sticker failures are recorded in the summary and the
    /// remaining stickers are still attempted.
    pub async fn download_pack(&self, package_id: PackageId) -> Result<DownloadSummary> {
        tracing::info!(package_id = %package_id, "Getting LINE sticker pack");

        let document = self.fetch_metadata(package_id).await?;
        let pack = StickerPack::from_json(&document.raw)?;
        let asset_kind = pack.asset_kind(self.config.static_only);

        tracing::info!(
            package_id = %pack.package_id,
            title = %pack.title,
            author = %pack.author,
            stickers = pack.sticker_count(),
            ?asset_kind,
            "Found sticker pack"
        );
        self.emit(Event::MetadataFetched {
            package_id: pack.package_id,
            title: pack.title.clone(),
            author: pack.author.clone(),
            sticker_count: pack.sticker_count(),
            asset_kind,
        });

        let output_dir = self.config.pack_dir(pack.package_id);
        tokio::fs::create_dir_all(&output_dir)
            .await
            .map_err(|source| {
                tracing::error!(path = ?output_dir, error = %source, "Failed to create pack directory");
                Error::CreateDir {
                    path: output_dir.clone(),
                    source,
                }
            })?;

        let outcomes = self.download_stickers(&pack, asset_kind, &output_dir).await;

        let report_path = self
            .write_report(&pack, asset_kind, &document, &output_dir)
            .await?;
        self.emit(Event::ReportWritten { path: report_path });

        let summary = DownloadSummary {
            pack,
            asset_kind,
            output_dir,
            outcomes,
        };

        tracing::info!(
            package_id = %summary.pack.package_id,
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "Sticker pack download finished"
        );
        self.emit(Event::Complete {
            package_id: summary.pack.package_id,
            path: summary.output_dir.clone(),
            succeeded: summary.succeeded(),
            failed: summary.failed(),
        });

        Ok(summary)
    }
}

//! Sticker image downloads.

use crate::error::DownloadError;
use crate::pack::{Sticker, StickerPack};
use crate::types::{AssetKind, Event, StickerOutcome};
use futures::StreamExt;
use std::path::Path;

use super::StickerDownloader;

impl StickerDownloader {
    /// Download every sticker of a pack into `output_dir`
    ///
    /// Stickers are started in pack order and at most
    /// `max_concurrent_downloads` requests are in flight. Outcomes are returned
    /// in pack order regardless of completion order.
    pub(crate) async fn download_stickers(
        &self,
        pack: &StickerPack,
        kind: AssetKind,
        output_dir: &Path,
    ) -> Vec<StickerOutcome> {
        let total = pack.sticker_count();
        tracing::info!(stickers = total, ?kind, "Downloading stickers");

        futures::stream::iter(pack.stickers.iter().enumerate())
            .map(|(i, sticker)| self.download_sticker(pack, sticker, kind, output_dir, i + 1, total))
            .buffered(self.config.max_concurrent_downloads)
            .collect::<Vec<_>>()
            .await
    }

    async fn download_sticker(
        &self,
        pack: &StickerPack,
        sticker: &Sticker,
        kind: AssetKind,
        output_dir: &Path,
        index: usize,
        total: usize,
    ) -> StickerOutcome {
        self.emit(Event::Downloading {
            sticker_id: sticker.id,
            index,
            total,
        });

        match self.try_download_sticker(pack, sticker, kind, output_dir).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(sticker_id = %sticker.id, error = %e, "Sticker download failed");
                self.emit(Event::DownloadFailed {
                    sticker_id: sticker.id,
                    error: e.to_string(),
                });
                StickerOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_download_sticker(
        &self,
        pack: &StickerPack,
        sticker: &Sticker,
        kind: AssetKind,
        output_dir: &Path,
    ) -> Result<StickerOutcome, DownloadError> {
        let path = output_dir.join(sticker.file_name());

        if self.config.skip_existing && self.sticker_exists(sticker, &path).await? {
            tracing::debug!(sticker_id = %sticker.id, ?path, "Skipping sticker, file already exists");
            self.emit(Event::Skipped {
                sticker_id: sticker.id,
                path: path.clone(),
            });
            return Ok(StickerOutcome::Skipped(path));
        }

        let url = sticker.download_url(&self.config.endpoints, pack.package_id, kind);
        tracing::debug!(sticker_id = %sticker.id, url = %url, "Requesting sticker");

        let request_error = |e: reqwest::Error| DownloadError::Request {
            sticker_id: sticker.id,
            reason: e.to_string(),
        };

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(DownloadError::HttpStatus {
                sticker_id: sticker.id,
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(request_error)?;

        // Plain write truncates, so a rerun replaces the previous image
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| DownloadError::Write {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        self.emit(Event::Downloaded {
            sticker_id: sticker.id,
            path: path.clone(),
            bytes: bytes.len() as u64,
        });

        Ok(StickerOutcome::Saved(path))
    }

    async fn sticker_exists(&self, sticker: &Sticker, path: &Path) -> Result<bool, DownloadError> {
        tokio::fs::try_exists(path).await.map_err(|e| {
            tracing::debug!(sticker_id = %sticker.id, ?path, error = %e, "Could not check for existing sticker");
            DownloadError::Write {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })
    }
}

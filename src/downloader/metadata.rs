//! Pack metadata fetching.

use crate::error::{Error, Result};
use crate::types::PackageId;

use super::StickerDownloader;

/// Raw metadata document as returned by the store
#[derive(Clone, Debug)]
pub struct MetadataDocument {
    /// URL the document was fetched from
    pub url: String,
    /// Response body, byte for byte
    pub raw: Vec<u8>,
}

impl StickerDownloader {
    /// Fetch the metadata document of a pack
    ///
    /// Issues exactly one GET request. Any status other than 200 is returned as
    /// [`Error::MetadataStatus`]; there is no retry.
    pub async fn fetch_metadata(&self, package_id: PackageId) -> Result<MetadataDocument> {
        let url = self.config.endpoints.metadata_url(package_id);
        tracing::debug!(package_id = %package_id, url = %url, "Requesting pack metadata");

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(package_id = %package_id, status = status.as_u16(), "Metadata request failed");
            return Err(Error::MetadataStatus {
                status: status.as_u16(),
                url,
            });
        }

        let raw = response.bytes().await?.to_vec();
        tracing::debug!(package_id = %package_id, bytes = raw.len(), "Received pack metadata");

        Ok(MetadataDocument { url, raw })
    }
}

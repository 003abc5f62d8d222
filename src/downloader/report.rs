//! Pack summary (`info.txt`) and raw metadata (`info.json`) files.

use crate::error::{Error, Result};
use crate::pack::StickerPack;
use crate::types::AssetKind;
use std::path::{Path, PathBuf};

use super::{MetadataDocument, StickerDownloader};

/// Human-readable summary file name
pub const INFO_TXT_FILE: &str = "info.txt";
/// Verbatim metadata file name
pub const INFO_JSON_FILE: &str = "info.json";

/// Render the text summary of a pack
///
/// Every sticker's resolved URL is listed, whether or not its download succeeded.
pub fn render_report(pack: &StickerPack, metadata_url: &str, download_urls: &[String]) -> String {
    let mut out = format!("{} by {}\n", pack.title, pack.author);
    out.push_str(&format!("Meta URL: {metadata_url}\n\n"));
    out.push_str(&format!("{} stickers:\n", pack.sticker_count()));
    for url in download_urls {
        out.push_str(url);
        out.push('\n');
    }
    out
}

impl StickerDownloader {
    /// Write `info.txt` and `info.json` into the pack directory
    ///
    /// Returns the path of `info.txt`. Write errors abort the run.
    pub(crate) async fn write_report(
        &self,
        pack: &StickerPack,
        kind: AssetKind,
        document: &MetadataDocument,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let urls = pack.download_urls(&self.config.endpoints, kind);
        let report = render_report(pack, &document.url, &urls);

        let info_txt = output_dir.join(INFO_TXT_FILE);
        tracing::info!(path = ?info_txt, "Writing info file");
        write_file(&info_txt, report.as_bytes()).await?;

        let info_json = output_dir.join(INFO_JSON_FILE);
        write_file(&info_json, &document.raw).await?;

        Ok(info_txt)
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    tokio::fs::write(path, contents).await.map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to write '{}': {}", path.display(), e),
        ))
    })
}

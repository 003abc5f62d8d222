//! Common test utilities for line-sticker-dl integration tests

#[allow(dead_code)]
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use line_sticker_dl::{Config, EndpointConfig, StickerDownloader};
use std::path::PathBuf;
use wiremock::MockServer;

/// Downloader wired to a mock store, writing below a fresh tempdir
pub fn test_downloader(server: &MockServer) -> (StickerDownloader, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().expect("failed to create tempdir");
    let config = Config {
        output_dir: temp_dir.path().join("output"),
        endpoints: EndpointConfig::with_base(&server.uri()),
        ..Default::default()
    };
    let downloader = StickerDownloader::new(config).expect("failed to create downloader");
    (downloader, temp_dir)
}

/// Sorted list of file names directly inside `dir`
pub fn files_in(dir: &std::path::Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| PathBuf::from(entry.file_name()))
        .collect();
    files.sort();
    files
}

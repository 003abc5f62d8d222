//! Shared test helpers for creating StickerDownloader instances in tests.

use crate::config::{Config, EndpointConfig};
use crate::downloader::StickerDownloader;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a downloader whose endpoints point at `server` and whose
/// output directory lives in a tempdir. Returns the downloader and the tempdir
/// (which must be kept alive).
pub(crate) fn create_test_downloader(server: &MockServer) -> (StickerDownloader, tempfile::TempDir) {
    create_test_downloader_with(server, |_| {})
}

/// Same as [`create_test_downloader`] but lets the caller tweak the config first
pub(crate) fn create_test_downloader_with(
    server: &MockServer,
    customize: impl FnOnce(&mut Config),
) -> (StickerDownloader, tempfile::TempDir) {
    let temp_dir = tempdir().unwrap();

    let mut config = Config {
        output_dir: temp_dir.path().join("output"),
        endpoints: EndpointConfig::with_base(&server.uri()),
        ..Default::default()
    };
    customize(&mut config);

    (StickerDownloader::new(config).unwrap(), temp_dir)
}

/// Metadata path for a pack under [`EndpointConfig::with_base`]
pub(crate) fn metadata_path(package_id: u64) -> String {
    format!("/stickershop/v1/product/{package_id}/android/productInfo.meta")
}

/// Static image path for a sticker under [`EndpointConfig::with_base`]
pub(crate) fn sticker_path(sticker_id: u64) -> String {
    format!("/stickershop/v1/sticker/{sticker_id}/android/sticker.png;compress=true")
}

/// Animated image path for a sticker under [`EndpointConfig::with_base`]
pub(crate) fn animated_path(package_id: u64, sticker_id: u64) -> String {
    format!("/products/0/0/1/{package_id}/android/animation/{sticker_id}.png")
}

/// Build a metadata document with English title/author and the given sticker ids
pub(crate) fn pack_json(package_id: u64, animated: bool, sticker_ids: &[u64]) -> String {
    serde_json::json!({
        "packageId": package_id,
        "onSale": true,
        "hasAnimation": animated,
        "title": { "en": "Test", "ja": "テスト" },
        "author": { "en": "Author", "ja": "作者" },
        "stickers": sticker_ids
            .iter()
            .map(|id| serde_json::json!({ "id": id, "width": 10, "height": 10 }))
            .collect::<Vec<_>>(),
    })
    .to_string()
}

/// Mount a metadata response
pub(crate) async fn mount_metadata(server: &MockServer, package_id: u64, body: &str) {
    Mock::given(method("GET"))
        .and(path(metadata_path(package_id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount an image response at `image_path`
pub(crate) async fn mount_image(server: &MockServer, image_path: String, status: u16, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

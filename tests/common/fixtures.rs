//! Store responses and mock helpers

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Minimal static pack with one sticker
pub const SINGLE_STICKER_PACK: &str = r#"{"packageId":12345,"title":{"en":"Test"},"author":{"en":"Author"},"stickers":[{"id":1,"width":10,"height":10}]}"#;

/// Static pack with three stickers, Japanese-only metadata
pub const THREE_STICKER_PACK: &str = r#"{"packageId":2000,"onSale":true,"validDays":0,"title":{"ja":"ねこ"},"author":{"ja":"作者"},"stickers":[{"id":101,"width":370,"height":320},{"id":102,"width":370,"height":320},{"id":103,"width":370,"height":320}]}"#;

/// Animated pack with two stickers
pub const ANIMATED_PACK: &str = r#"{"packageId":3000,"hasAnimation":true,"hasSound":false,"title":{"en":"Moving","ja":"動く"},"author":{"en":"Studio"},"stickers":[{"id":301,"width":320,"height":320},{"id":302,"width":320,"height":320}]}"#;

/// Fake PNG payload; the downloader never inspects image bytes
pub fn png_bytes(id: u64) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(id.to_string().as_bytes());
    bytes
}

/// Metadata path for a pack
pub fn metadata_path(package_id: u64) -> String {
    format!("/stickershop/v1/product/{package_id}/android/productInfo.meta")
}

/// Static image path for a sticker
pub fn sticker_path(sticker_id: u64) -> String {
    format!("/stickershop/v1/sticker/{sticker_id}/android/sticker.png;compress=true")
}

/// Animated image path for a sticker
pub fn animated_path(package_id: u64, sticker_id: u64) -> String {
    format!("/products/0/0/1/{package_id}/android/animation/{sticker_id}.png")
}

/// Serve `body` as the metadata document of `package_id`
pub async fn serve_metadata(server: &MockServer, package_id: u64, body: &str) {
    Mock::given(method("GET"))
        .and(path(metadata_path(package_id)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Serve a sticker image (or an error status) at `image_path`
pub async fn serve_image(server: &MockServer, image_path: String, status: u16, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body))
        .mount(server)
        .await;
}

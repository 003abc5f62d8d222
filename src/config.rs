//! Configuration types for line-sticker-dl

use crate::error::{Error, Result};
use crate::types::{PackageId, StickerId};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Placeholder replaced by the pack identifier in endpoint templates
pub const PACKAGE_ID_PLACEHOLDER: &str = "{package_id}";
/// Placeholder replaced by the sticker identifier in endpoint templates
pub const STICKER_ID_PLACEHOLDER: &str = "{sticker_id}";

/// Prefix of the per-pack output directory (`LINE_<package id>`)
pub const PACK_DIR_PREFIX: &str = "LINE_";

/// Store endpoints used to fetch metadata and images
///
/// Each template contains [`PACKAGE_ID_PLACEHOLDER`] and/or [`STICKER_ID_PLACEHOLDER`].
/// Tests point these at a local mock server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Pack metadata document, parameterized by pack id
    #[serde(default = "default_metadata_url")]
    pub metadata_url: String,

    /// Static sticker image, parameterized by sticker id
    #[serde(default = "default_sticker_url")]
    pub sticker_url: String,

    /// Animated sticker image, parameterized by pack id and sticker id
    #[serde(default = "default_animated_sticker_url")]
    pub animated_sticker_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            metadata_url: default_metadata_url(),
            sticker_url: default_sticker_url(),
            animated_sticker_url: default_animated_sticker_url(),
        }
    }
}

impl EndpointConfig {
    /// Default endpoints with the scheme and host replaced by `base`
    ///
    /// Paths (and the static image's `;compress=true` suffix) are kept exactly as
    /// in [`EndpointConfig::default`]. Mainly useful to point the downloader at a
    /// mirror or a local mock server.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let defaults = Self::default();
        Self {
            metadata_url: rebase(&defaults.metadata_url, base),
            sticker_url: rebase(&defaults.sticker_url, base),
            animated_sticker_url: rebase(&defaults.animated_sticker_url, base),
        }
    }

    /// Metadata URL for a pack
    pub fn metadata_url(&self, package_id: PackageId) -> String {
        self.metadata_url
            .replace(PACKAGE_ID_PLACEHOLDER, &package_id.to_string())
    }

    /// Static image URL for a sticker
    pub fn sticker_url(&self, sticker_id: StickerId) -> String {
        self.sticker_url
            .replace(STICKER_ID_PLACEHOLDER, &sticker_id.to_string())
    }

    /// Animated image URL for a sticker of a pack
    pub fn animated_sticker_url(&self, package_id: PackageId, sticker_id: StickerId) -> String {
        self.animated_sticker_url
            .replace(PACKAGE_ID_PLACEHOLDER, &package_id.to_string())
            .replace(STICKER_ID_PLACEHOLDER, &sticker_id.to_string())
    }

    fn validate(&self) -> Result<()> {
        let templates = [
            ("endpoints.metadata_url", &self.metadata_url, &[PACKAGE_ID_PLACEHOLDER][..]),
            ("endpoints.sticker_url", &self.sticker_url, &[STICKER_ID_PLACEHOLDER][..]),
            (
                "endpoints.animated_sticker_url",
                &self.animated_sticker_url,
                &[PACKAGE_ID_PLACEHOLDER, STICKER_ID_PLACEHOLDER][..],
            ),
        ];

        for (key, template, placeholders) in templates {
            for placeholder in placeholders {
                if !template.contains(*placeholder) {
                    return Err(Error::config(
                        key,
                        format!("template '{template}' is missing {placeholder}"),
                    ));
                }
            }

            // Substitute a dummy id so the rest of the template can be checked as a URL
            let sample = template
                .replace(PACKAGE_ID_PLACEHOLDER, "1")
                .replace(STICKER_ID_PLACEHOLDER, "1");
            url::Url::parse(&sample).map_err(|e| {
                Error::config(key, format!("template '{template}' is not a valid URL: {e}"))
            })?;
        }

        Ok(())
    }
}

/// Main configuration for [`StickerDownloader`](crate::StickerDownloader)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Root output directory (default: "./output")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Always download static PNGs, even for animated packs
    #[serde(default)]
    pub static_only: bool,

    /// Leave stickers whose file already exists untouched (default: overwrite)
    #[serde(default)]
    pub skip_existing: bool,

    /// Maximum concurrent sticker downloads (default: 1 = sequential)
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_downloads: usize,

    /// Per-request timeout in seconds (None = wait indefinitely)
    #[serde(default, with = "optional_duration_serde")]
    pub request_timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Store endpoints
    #[serde(default)]
    pub endpoints: EndpointConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            static_only: false,
            skip_existing: false,
            max_concurrent_downloads: default_max_concurrent(),
            request_timeout: None,
            user_agent: default_user_agent(),
            endpoints: EndpointConfig::default(),
        }
    }
}

impl Config {
    /// Check settings that would otherwise fail in the middle of a run
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_downloads == 0 {
            return Err(Error::config(
                "max_concurrent_downloads",
                "must be at least 1",
            ));
        }
        if self.request_timeout == Some(Duration::ZERO) {
            return Err(Error::config("request_timeout", "must be greater than zero"));
        }
        self.endpoints.validate()
    }

    /// Output directory of a pack (`<output_dir>/LINE_<id>`)
    pub fn pack_dir(&self, package_id: PackageId) -> PathBuf {
        self.output_dir
            .join(format!("{PACK_DIR_PREFIX}{package_id}"))
    }
}

// Swap the `scheme://host` part of a template for `base`, keeping the path
fn rebase(template: &str, base: &str) -> String {
    let path = template
        .split_once("://")
        .and_then(|(_, rest)| rest.find('/').map(|i| &rest[i..]))
        .unwrap_or_default();
    format!("{base}{path}")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_max_concurrent() -> usize {
    1
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_metadata_url() -> String {
    "https://sdl-stickershop.line.naver.jp/stickershop/v1/product/{package_id}/android/productInfo.meta"
        .to_string()
}

fn default_sticker_url() -> String {
    "https://stickershop.line-scdn.net/stickershop/v1/sticker/{sticker_id}/android/sticker.png;compress=true"
        .to_string()
}

fn default_animated_sticker_url() -> String {
    "https://sdl-stickershop.line.naver.jp/products/0/0/1/{package_id}/android/animation/{sticker_id}.png"
        .to_string()
}

// Optional Duration serialization helper (whole seconds)
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

//! Sticker pack records built from the store's metadata document.
//!
//! The document is first deserialized into loose structs where every field is
//! optional, then validated into [`StickerPack`] and [`Sticker`]. Missing fields
//! surface as [`ValidationError`]s instead of panics.

use crate::config::EndpointConfig;
use crate::error::{Result, ValidationError};
use crate::types::{AssetKind, PackageId, StickerId};
use serde::{Deserialize, Serialize};

/// File extension of saved sticker images (animated stickers are APNGs)
pub const IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPack {
    package_id: Option<u64>,
    title: Option<RawLocalized>,
    author: Option<RawLocalized>,
    has_animation: Option<bool>,
    has_sound: Option<bool>,
    stickers: Option<Vec<RawSticker>>,
}

/// Localized string map; only `en` and `ja` are consulted
#[derive(Debug, Default, Deserialize)]
struct RawLocalized {
    en: Option<String>,
    ja: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSticker {
    id: Option<u64>,
    width: Option<u32>,
    height: Option<u32>,
}

/// A LINE sticker pack
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StickerPack {
    /// Store identifier
    pub package_id: PackageId,
    /// Title, English when available, Japanese otherwise
    pub title: String,
    /// Author, same localization rule as the title
    pub author: String,
    /// Whether animated images exist for the stickers
    pub animated: bool,
    /// Whether the stickers carry sound
    pub sound: bool,
    /// Stickers in store order
    pub stickers: Vec<Sticker>,
}

/// A single sticker of a pack
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sticker {
    /// Store identifier
    pub id: StickerId,
    /// Width in pixels (informational)
    pub width: u32,
    /// Height in pixels (informational)
    pub height: u32,
}

impl StickerPack {
    /// Parse and validate a raw metadata document
    pub fn from_json(raw: &[u8]) -> Result<Self> {
        let doc: RawPack = serde_json::from_slice(raw)?;
        Ok(Self::try_from(doc)?)
    }

    /// Number of stickers in the pack
    pub fn sticker_count(&self) -> usize {
        self.stickers.len()
    }

    /// Image resource to fetch for this pack
    pub fn asset_kind(&self, static_only: bool) -> AssetKind {
        AssetKind::for_pack(self.animated, static_only)
    }

    /// Resolved download URL of every sticker, in pack order
    pub fn download_urls(&self, endpoints: &EndpointConfig, kind: AssetKind) -> Vec<String> {
        self.stickers
            .iter()
            .map(|s| s.download_url(endpoints, self.package_id, kind))
            .collect()
    }
}

impl TryFrom<RawPack> for StickerPack {
    type Error = ValidationError;

    fn try_from(raw: RawPack) -> std::result::Result<Self, Self::Error> {
        let package_id = raw.package_id.ok_or(ValidationError::NotAPack)?;
        let title = localized("title", raw.title)?;
        let author = localized("author", raw.author)?;

        let stickers = raw
            .stickers
            .ok_or(ValidationError::MissingField { field: "stickers" })?
            .into_iter()
            .enumerate()
            .map(|(index, s)| Sticker::try_from_raw(index, s))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            package_id: PackageId(package_id),
            title,
            author,
            animated: raw.has_animation.unwrap_or(false),
            sound: raw.has_sound.unwrap_or(false),
            stickers,
        })
    }
}

fn localized(
    field: &'static str,
    value: Option<RawLocalized>,
) -> std::result::Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField { field })?;
    [value.en, value.ja]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .ok_or(ValidationError::MissingLocalization { field })
}

impl Sticker {
    fn try_from_raw(index: usize, raw: RawSticker) -> std::result::Result<Self, ValidationError> {
        let id = raw.id.ok_or(ValidationError::InvalidSticker { index })?;
        Ok(Self {
            id: StickerId(id),
            width: raw.width.unwrap_or_default(),
            height: raw.height.unwrap_or_default(),
        })
    }

    /// Download URL for the requested asset kind
    pub fn download_url(
        &self,
        endpoints: &EndpointConfig,
        package_id: PackageId,
        kind: AssetKind,
    ) -> String {
        match kind {
            AssetKind::Static => endpoints.sticker_url(self.id),
            AssetKind::Animated => endpoints.animated_sticker_url(package_id, self.id),
        }
    }

    /// File name the image is saved under
    pub fn file_name(&self) -> String {
        format!("{}.{IMAGE_EXTENSION}", self.id)
    }
}

//! Image formats accepted by the content store.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image formats recognised by content sniffing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    #[display("png")]
    Png,
    /// JPEG / JFIF
    #[display("jpeg")]
    Jpeg,
    /// WebP (RIFF container)
    #[display("webp")]
    WebP,
}

impl ImageFormat {
    /// Canonical MIME type for the format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Canonical filename extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::WebP => "webp",
        }
    }
}

/// Content type to serve a stored artifact with, inferred from its extension.
///
/// Unknown extensions fall back to `application/octet-stream`; a missing
/// extension is served as `image/jpg`.
///
/// # Examples
///
/// ```
/// use mediavault_core::content_type_for_path;
///
/// assert_eq!(content_type_for_path("a.PNG"), "image/png");
/// assert_eq!(content_type_for_path("a.gif"), "application/octet-stream");
/// ```
pub fn content_type_for_path(path: impl AsRef<Path>) -> &'static str {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "" => "image/jpg",
        "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn content_types_follow_extension() {
        assert_eq!(content_type_for_path("x.png"), "image/png");
        assert_eq!(content_type_for_path("x.jpg"), "image/jpg");
        assert_eq!(content_type_for_path("x.jpeg"), "image/jpeg");
        assert_eq!(content_type_for_path("x.webp"), "image/webp");
        assert_eq!(content_type_for_path("x"), "image/jpg");
        assert_eq!(content_type_for_path("x.txt"), "application/octet-stream");
    }

    #[test]
    fn every_format_serves_its_own_mime_type() {
        for format in ImageFormat::iter() {
            let name = format!("artifact.{}", format.extension());
            let served = content_type_for_path(&name);
            // jpg is served under the legacy image/jpg alias
            if format == ImageFormat::Jpeg {
                assert_eq!(served, "image/jpg");
            } else {
                assert_eq!(served, format.mime_type());
            }
        }
    }
}

//! Magic-number content sniffing.

use mediavault_core::ImageFormat;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// JPEG start-of-image marker followed by the first marker prefix.
pub const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// RIFF container tag at offset 0 of a WebP file.
pub const RIFF_TAG: &[u8; 4] = b"RIFF";

/// WebP form type at offset 8 of a RIFF container.
pub const WEBP_TAG: &[u8; 4] = b"WEBP";

/// Identify an image format from its leading bytes.
///
/// This is the authoritative authenticity check: declared MIME types and
/// extensions are only pre-filters.
///
/// # Examples
///
/// ```
/// use mediavault_core::ImageFormat;
/// use mediavault_storage::sniff_image_format;
///
/// assert_eq!(sniff_image_format(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
/// assert_eq!(sniff_image_format(b"hello"), None);
/// ```
pub fn sniff_image_format(content: &[u8]) -> Option<ImageFormat> {
    if content.starts_with(&PNG_SIGNATURE) {
        return Some(ImageFormat::Png);
    }
    if content.starts_with(&JPEG_SIGNATURE) {
        return Some(ImageFormat::Jpeg);
    }
    if content.len() >= 12 && &content[0..4] == RIFF_TAG && &content[8..12] == WEBP_TAG {
        return Some(ImageFormat::WebP);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_needs_full_signature() {
        assert_eq!(sniff_image_format(&PNG_SIGNATURE), Some(ImageFormat::Png));
        assert_eq!(sniff_image_format(&PNG_SIGNATURE[..7]), None);
    }

    #[test]
    fn jpeg_needs_three_bytes() {
        assert_eq!(sniff_image_format(&[0xFF, 0xD8]), None);
        assert_eq!(sniff_image_format(&[0xFF, 0xD8, 0xFF]), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn webp_checks_both_tags() {
        let mut webp = b"RIFF\x24\x00\x00\x00WEBPVP8 ".to_vec();
        assert_eq!(sniff_image_format(&webp), Some(ImageFormat::WebP));

        // RIFF container holding something else (WAVE audio)
        webp[8..12].copy_from_slice(b"WAVE");
        assert_eq!(sniff_image_format(&webp), None);

        // Truncated before the form type
        assert_eq!(sniff_image_format(b"RIFF\x24\x00\x00\x00WEB"), None);
    }

    #[test]
    fn arbitrary_bytes_match_nothing() {
        assert_eq!(sniff_image_format(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), None);
        assert_eq!(sniff_image_format(&[]), None);
    }
}

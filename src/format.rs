/// Image formats recognized by signature in byte payloads.
///
/// Only these four are sniffed; the extractor itself is format-agnostic once
/// pixels are decoded, so anything the `image` crate can read still produces
/// a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    WebP,
}

impl ImageKind {
    /// The HTTP media type string for this kind.
    pub fn media_type(self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Gif => "image/gif",
            ImageKind::WebP => "image/webp",
        }
    }
}

/// Sniff the image format of a byte payload from its magic bytes.
///
/// Recognizes the PNG signature, the JPEG SOI marker, GIF87a/GIF89a headers
/// and the RIFF/WEBP container. Returns `None` for anything else, including
/// payloads too short to carry a signature; callers pick their own fallback.
pub fn sniff_image_kind(bytes: &[u8]) -> Option<ImageKind> {
    if bytes.len() >= 8 && bytes[..8] == [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A] {
        return Some(ImageKind::Png);
    }

    if bytes.len() >= 3 && bytes[..3] == [0xFF, 0xD8, 0xFF] {
        return Some(ImageKind::Jpeg);
    }

    if bytes.len() >= 6 && &bytes[..4] == b"GIF8" && (bytes[4] == b'7' || bytes[4] == b'9') && bytes[5] == b'a' {
        return Some(ImageKind::Gif);
    }

    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(ImageKind::WebP);
    }

    None
}

//! Turning image locators and byte payloads into RGBA pixel buffers.

use image::RgbaImage;
use log::debug;

use crate::error::{DecodeError, Result};
use crate::format::sniff_image_kind;

/// Source of decoded pixel data for palette extraction.
///
/// The built-in [`FileDecoder`] reads from the filesystem; implement this
/// trait to feed extraction from anywhere else (an asset bundle, a network
/// fetch, a test fixture) while keeping the fail-soft entry points in the
/// crate root.
pub trait ImageDecoder {
    /// Decode the image named by `locator` into an RGBA buffer.
    fn decode(&self, locator: &str) -> Result<RgbaImage>;
}

/// Decoder that treats locators as filesystem paths.
///
/// The content format is guessed from the file's leading bytes, so an image
/// with a mismatched extension still decodes.
#[derive(Debug, Default)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, locator: &str) -> Result<RgbaImage> {
        let reader = image::io::Reader::open(locator)
            .map_err(|source| DecodeError::Open {
                locator: locator.to_owned(),
                source,
            })?
            .with_guessed_format()
            .map_err(|source| DecodeError::Open {
                locator: locator.to_owned(),
                source,
            })?;

        let image = reader.decode().map_err(|source| DecodeError::Decode {
            locator: locator.to_owned(),
            source,
        })?;

        let buffer = image.to_rgba8();
        debug!("decoded {} ({}x{})", locator, buffer.width(), buffer.height());

        Ok(buffer)
    }
}

/// Decode an in-memory payload into an RGBA buffer.
///
/// The payload signature is sniffed up front so a failure names the format
/// that was attempted rather than a generic guess.
pub fn decode_memory(bytes: &[u8]) -> Result<RgbaImage> {
    let kind = sniff_image_kind(bytes);

    let image = image::load_from_memory(bytes).map_err(|source| match kind {
        Some(kind) => DecodeError::Payload {
            media_type: kind.media_type(),
            source,
        },
        None => DecodeError::UnrecognizedPayload { source },
    })?;

    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_an_open_error() {
        let error = FileDecoder
            .decode("/no/such/image.png")
            .expect_err("path should not exist");

        assert!(matches!(error, DecodeError::Open { .. }));
    }

    #[test]
    fn unsigned_payload_is_unrecognized() {
        let error = decode_memory(b"definitely not pixels").expect_err("bogus payload");

        assert!(matches!(error, DecodeError::UnrecognizedPayload { .. }));
    }

    #[test]
    fn corrupt_payload_names_the_sniffed_format() {
        let mut payload = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        payload.extend_from_slice(b"truncated");

        let error = decode_memory(&payload).expect_err("corrupt payload");
        match error {
            DecodeError::Payload { media_type, .. } => assert_eq!(media_type, "image/png"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

//! Error types for the decode boundary.
//!
//! Palette extraction itself cannot fail: once a pixel buffer exists, every
//! input maps to a (possibly empty) palette. Errors only arise while turning
//! a locator or byte payload into that buffer, and the convenience entry
//! points in the crate root coerce them to empty results.

use thiserror::Error;

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Ways an image locator or payload can fail to become a pixel buffer.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The locator could not be opened for reading.
    #[error("failed to open image at {locator}")]
    Open {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    /// The locator opened but its content did not decode as an image.
    #[error("failed to decode image at {locator}")]
    Decode {
        locator: String,
        #[source]
        source: image::ImageError,
    },

    /// An in-memory payload with a recognized signature failed to decode.
    #[error("failed to decode {media_type} payload")]
    Payload {
        media_type: &'static str,
        #[source]
        source: image::ImageError,
    },

    /// An in-memory payload carried none of the signatures we recognize.
    #[error("payload carries no recognized image signature")]
    UnrecognizedPayload {
        #[source]
        source: image::ImageError,
    },
}

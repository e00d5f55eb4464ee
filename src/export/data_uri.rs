//! Data-URI helpers for media crossing the GUI boundary
//!
//! Photos and sounds travel as `data:<mime>;base64,<data>` strings because the
//! presentation layer cannot pass raw binary. Image kind detection is a narrow
//! substring check for `image/png`; everything else is treated as JPEG.

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// Image formats accepted for contact photos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// PNG
    Png,
    /// JPEG
    Jpeg,
}

impl ImageKind {
    /// Pick the kind from a file's extension; non-PNG files are JPEG
    pub fn from_path(path: &Path) -> Self {
        match lowercase_extension(path).as_deref() {
            Some("png") => Self::Png,
            _ => Self::Jpeg,
        }
    }

    /// MIME type
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Extension including the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => ".png",
            Self::Jpeg => ".jpg",
        }
    }
}

/// Audio formats accepted for contact sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioKind {
    /// Ogg Vorbis
    Ogg,
    /// MP3
    Mp3,
    /// WAV
    Wav,
}

impl AudioKind {
    /// Pick the kind from a file's extension; unknown files are Ogg
    pub fn from_path(path: &Path) -> Self {
        match lowercase_extension(path).as_deref() {
            Some("mp3") => Self::Mp3,
            Some("wav") => Self::Wav,
            _ => Self::Ogg,
        }
    }

    /// MIME type
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Ogg => "audio/ogg",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Report PNG if the payload mentions `image/png` anywhere, else JPEG
pub fn detect_image_kind(payload: &str) -> ImageKind {
    if payload.contains("image/png") {
        ImageKind::Png
    } else {
        ImageKind::Jpeg
    }
}

/// Drop everything up to and including the first `,`
///
/// Payloads without a prefix are returned unchanged.
pub fn strip_data_uri_prefix(payload: &str) -> &str {
    payload
        .split_once(',')
        .map_or(payload, |(_, data)| data)
}

/// Encode bytes as `data:<mime>;base64,<data>`
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Decode the base64 part of a data-URI (or raw base64) payload
///
/// # Errors
///
/// Returns `KardooError::InvalidPayload` if the data is not valid base64.
pub fn decode_data_uri(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(strip_data_uri_prefix(payload))?)
}

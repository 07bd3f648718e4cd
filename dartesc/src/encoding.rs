//! Source file decoding with a UTF-16 fallback.
//!
//! Files are tried as UTF-8 first. When that fails the bytes are decoded as
//! UTF-16: a byte order mark picks the endianness, and little-endian is
//! assumed without one. Anything that is valid in neither is rejected.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use serde::Serialize;
use std::fmt;

/// Encoding a source file was successfully decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceEncoding {
    /// UTF-8, with or without a BOM (a BOM is kept as U+FEFF in the text).
    #[serde(rename = "utf-8")]
    Utf8,
    /// UTF-16 little-endian.
    #[serde(rename = "utf-16le")]
    Utf16Le,
    /// UTF-16 big-endian.
    #[serde(rename = "utf-16be")]
    Utf16Be,
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "UTF-8"),
            Self::Utf16Le => write!(f, "UTF-16LE"),
            Self::Utf16Be => write!(f, "UTF-16BE"),
        }
    }
}

/// Decoded text of one file together with the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSource {
    /// The file content.
    pub text: String,
    /// How the bytes were decoded.
    pub encoding: SourceEncoding,
}

/// Decode raw file bytes, returning `None` if neither UTF-8 nor UTF-16 fits.
#[must_use]
pub fn decode_source(bytes: &[u8]) -> Option<DecodedSource> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(DecodedSource {
            text: text.to_owned(),
            encoding: SourceEncoding::Utf8,
        });
    }

    let (encoding, tag, payload) = match Encoding::for_bom(bytes) {
        Some((found, bom_len)) if found == UTF_16BE => {
            (UTF_16BE, SourceEncoding::Utf16Be, &bytes[bom_len..])
        }
        Some((found, bom_len)) if found == UTF_16LE => {
            (UTF_16LE, SourceEncoding::Utf16Le, &bytes[bom_len..])
        }
        _ => (UTF_16LE, SourceEncoding::Utf16Le, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(payload)
        .map(|text| DecodedSource {
            text: text.into_owned(),
            encoding: tag,
        })
}

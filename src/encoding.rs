//! Text encoding detection for template files.
//!
//! Only UTF-8 compatible content is substituted. Anything else is reported and
//! skipped by the processor.

use std::fmt::Display;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    Unknown,
}

impl TextEncoding {
    /// Guesses the encoding of `bytes` from its byte order mark, falling back
    /// to UTF-8 validation.
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(UTF8_BOM) {
            return match std::str::from_utf8(&bytes[UTF8_BOM.len()..]) {
                Ok(_) => TextEncoding::Utf8Bom,
                Err(_) => TextEncoding::Unknown,
            };
        }
        if bytes.starts_with(UTF16_LE_BOM) {
            return TextEncoding::Utf16Le;
        }
        if bytes.starts_with(UTF16_BE_BOM) {
            return TextEncoding::Utf16Be;
        }
        match std::str::from_utf8(bytes) {
            Ok(_) => TextEncoding::Utf8,
            Err(_) => TextEncoding::Unknown,
        }
    }

    pub fn is_utf8_compatible(&self) -> bool {
        matches!(self, TextEncoding::Utf8 | TextEncoding::Utf8Bom)
    }
}

impl Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf8Bom => "UTF-8 with BOM",
            TextEncoding::Utf16Le => "UTF-16LE",
            TextEncoding::Utf16Be => "UTF-16BE",
            TextEncoding::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Decodes `bytes` if they are UTF-8 compatible. A leading BOM is kept so
/// the written file round-trips it.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, TextEncoding> {
    let encoding = TextEncoding::detect(&bytes);
    if !encoding.is_utf8_compatible() {
        return Err(encoding);
    }
    String::from_utf8(bytes).map_err(|_| TextEncoding::Unknown)
}

//! Conversion between `#RRGGBB` strings and RGB pixels

use crate::io::error::{CamoError, Result};
use image::Rgb;

/// Parse a `#RRGGBB` colour
///
/// Surrounding whitespace and a single leading `#` are ignored and hex digits
/// are case-insensitive. Channels are returned in RGB order.
///
/// # Errors
///
/// Returns [`CamoError::InvalidColorFormat`] if the remainder is not exactly six
/// hex digits.
pub fn parse_hex(value: &str) -> Result<Rgb<u8>> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || CamoError::InvalidColorFormat {
        value: value.to_string(),
    };

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(invalid)
    };

    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}

/// Format a colour as an upper-case `#RRGGBB` string
pub fn format_hex(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02X}{g:02X}{b:02X}")
}

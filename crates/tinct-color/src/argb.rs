//! Packed ARGB color values and their hex wire format.
//!
//! The canonical textual form is `0xAARRGGBB` — eight hex digits with an
//! explicit alpha byte. Parsing also accepts the six-digit `RRGGBB` form
//! (alpha defaults to fully opaque) and tolerates a `#` prefix, a `0x`
//! prefix, or no prefix at all. Formatting always produces the canonical
//! eight-digit lowercase form, so a parse → format pass normalizes any
//! accepted spelling.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Argb
// ---------------------------------------------------------------------------

/// A color as four 8-bit channels in ARGB order.
///
/// This is a plain packed-byte value with no color-space semantics.
/// Channel math (luminance, blending toward white or black) lives in
/// [`crate::luminance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    /// Alpha: 0 (transparent) to 255 (opaque).
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Argb {
    /// Create a color from all four channels.
    #[inline]
    #[must_use]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create a fully opaque color from RGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Return a copy with the RGB channels replaced, keeping alpha.
    #[inline]
    #[must_use]
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, ..self }
    }

    /// Parse a hex color string.
    ///
    /// Accepts eight hex digits (`AARRGGBB`) or six (`RRGGBB`, alpha
    /// defaults to 255), optionally prefixed with `0x` or `#`. Digits may
    /// be upper- or lowercase; surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] for any other input, carrying the
    /// offending string for error messages.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix('#'))
            .unwrap_or(trimmed);

        let bytes = digits.as_bytes();
        match bytes.len() {
            // AARRGGBB
            8 => {
                let a = parse_hex_byte(&bytes[0..2]);
                let r = parse_hex_byte(&bytes[2..4]);
                let g = parse_hex_byte(&bytes[4..6]);
                let b = parse_hex_byte(&bytes[6..8]);
                match (a, r, g, b) {
                    (Some(a), Some(r), Some(g), Some(b)) => Ok(Self::new(a, r, g, b)),
                    _ => Err(ParseColorError::new(trimmed)),
                }
            }
            // RRGGBB — alpha defaults to fully opaque
            6 => {
                let r = parse_hex_byte(&bytes[0..2]);
                let g = parse_hex_byte(&bytes[2..4]);
                let b = parse_hex_byte(&bytes[4..6]);
                match (r, g, b) {
                    (Some(r), Some(g), Some(b)) => Ok(Self::rgb(r, g, b)),
                    _ => Err(ParseColorError::new(trimmed)),
                }
            }
            _ => Err(ParseColorError::new(trimmed)),
        }
    }
}

impl fmt::Display for Argb {
    /// Formats as the canonical `0x` + eight lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}",
            self.a, self.r, self.g, self.b
        )
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ---------------------------------------------------------------------------
// ParseColorError
// ---------------------------------------------------------------------------

/// Error returned when a string is not a recognizable hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The input that failed to parse (whitespace already trimmed).
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color format: {:?}", self.input)
    }
}

impl std::error::Error for ParseColorError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Perceived luminance and the readability band adjustment.
//!
//! Luminance is the weighted channel sum over raw byte values:
//!
//!   lum = 0.2126 * R + 0.7152 * G + 0.0722 * B
//!
//! The weights sum to 1, so the scale runs 0.0 (black) to 255.0 (white),
//! and thresholds are expressed on that same scale. No sRGB
//! linearization happens here — this is the cheap perceptual estimate,
//! tuned for deciding whether a color reads as "too dark" or "too
//! light", not for WCAG contrast math.
//!
//! The adjustment is proportional: colors just outside the band move a
//! little, colors far outside move up to `max_strength` of the way
//! toward pure white or pure black. Colors inside the band pass through
//! bit-for-bit, which makes the operation idempotent.

use std::fmt;

use crate::argb::Argb;

/// Compute the perceived luminance of a color on the 0–255 scale.
///
/// Alpha is ignored; only the RGB channels contribute.
#[must_use]
pub fn perceived_luminance(color: Argb) -> f64 {
    0.2126f64.mul_add(
        f64::from(color.r),
        0.7152f64.mul_add(f64::from(color.g), 0.0722 * f64::from(color.b)),
    )
}

/// Blend each RGB channel toward white by `fraction` (0.0 to 1.0).
///
/// `fraction` 0.0 returns the color unchanged, 1.0 returns pure white.
/// Alpha is preserved.
#[must_use]
pub fn lighten_toward_white(color: Argb, fraction: f64) -> Argb {
    color.with_rgb(
        blend_up(color.r, fraction),
        blend_up(color.g, fraction),
        blend_up(color.b, fraction),
    )
}

/// Blend each RGB channel toward black by `fraction` (0.0 to 1.0).
///
/// `fraction` 0.0 returns the color unchanged, 1.0 returns pure black.
/// Alpha is preserved.
#[must_use]
pub fn darken_toward_black(color: Argb, fraction: f64) -> Argb {
    color.with_rgb(
        blend_down(color.r, fraction),
        blend_down(color.g, fraction),
        blend_down(color.b, fraction),
    )
}

/// `c + (255 - c) * fraction`, rounded to the nearest byte.
#[inline]
fn blend_up(c: u8, fraction: f64) -> u8 {
    to_byte((255.0 - f64::from(c)).mul_add(fraction, f64::from(c)))
}

/// `c * (1 - fraction)`, rounded to the nearest byte.
#[inline]
fn blend_down(c: u8, fraction: f64) -> u8 {
    to_byte(f64::from(c) * (1.0 - fraction))
}

/// Round a channel value to the nearest byte, clamping to 0–255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// LuminanceBand
// ---------------------------------------------------------------------------

/// The target luminance band for [`adjust_lightness`].
///
/// Colors whose perceived luminance falls inside `[low, high]` are left
/// untouched. Outside the band, the blend strength grows with distance
/// and is capped by `max_strength`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceBand {
    /// Lower luminance threshold, 0–255 scale.
    pub low: f64,
    /// Upper luminance threshold, 0–255 scale.
    pub high: f64,
    /// Cap on the blend fraction, 0.0 to 1.0.
    pub max_strength: f64,
}

impl LuminanceBand {
    /// Create a band, rejecting inverted thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::InvertedThresholds`] if `high < low`.
    pub fn new(low: f64, high: f64, max_strength: f64) -> Result<Self, BandError> {
        if high < low {
            return Err(BandError::InvertedThresholds { low, high });
        }
        Ok(Self {
            low,
            high,
            max_strength,
        })
    }
}

impl Default for LuminanceBand {
    /// The readability band used by the CLI: 150–200 at strength 0.5.
    fn default() -> Self {
        Self {
            low: 150.0,
            high: 200.0,
            max_strength: 0.5,
        }
    }
}

/// Error returned for an invalid luminance band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandError {
    /// The upper threshold was below the lower one.
    InvertedThresholds { low: f64, high: f64 },
}

impl fmt::Display for BandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedThresholds { low, high } => {
                write!(f, "high threshold {high} is below low threshold {low}")
            }
        }
    }
}

impl std::error::Error for BandError {}

// ---------------------------------------------------------------------------
// Adjustment
// ---------------------------------------------------------------------------

/// Nudge a color's lightness into the band.
///
/// - Inside `[low, high]`: returned unchanged.
/// - Below `low`: blended toward white by
///   `(low - lum) / low * max_strength`.
/// - Above `high`: blended toward black by
///   `(lum - high) / (255 - high) * max_strength`. When `high` is at or
///   beyond 255 the distance ratio degenerates, so the cap alone applies.
///
/// The blend fraction is clamped to [0, 1] in both directions, so
/// out-of-range strengths degrade to a plain clamp instead of producing
/// channel overflow. Alpha always passes through untouched.
#[must_use]
pub fn adjust_lightness(color: Argb, band: LuminanceBand) -> Argb {
    let lum = perceived_luminance(color);

    if lum >= band.low && lum <= band.high {
        return color;
    }

    if lum < band.low {
        let fraction = ((band.low - lum) / band.low * band.max_strength).clamp(0.0, 1.0);
        return lighten_toward_white(color, fraction);
    }

    let fraction = if band.high < 255.0 {
        ((lum - band.high) / (255.0 - band.high) * band.max_strength).clamp(0.0, 1.0)
    } else {
        band.max_strength.clamp(0.0, 1.0)
    };
    darken_toward_black(color, fraction)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! # tinct-color — packed ARGB colors and luminance adjustment
//!
//! Parses hex color strings (`0xAARRGGBB`, `#RRGGBB`, and bare-digit
//! forms), measures their perceived luminance, and nudges colors that
//! fall outside a target luminance band back toward it. The adjustment
//! is proportional: a color slightly outside the band moves slightly, a
//! color far outside moves up to a configurable maximum strength.
//!
//! # Architecture
//!
//! ```text
//! hex string ("0xff5f3e47", "#cbbbcf", ...)
//!     │
//!     ▼
//! argb.rs:      parse into Argb { a, r, g, b } (bytes)
//!     │
//!     ▼
//! luminance.rs: perceived_luminance → blend toward white or black
//!     │
//!     ▼
//! Argb Display: "0x" + 8 lowercase hex digits
//! ```
//!
//! All math happens on raw byte values (0–255 per channel), not in a
//! linearized color space. Luminance thresholds live on the same 0–255
//! scale.

pub mod argb;
pub mod luminance;

pub use argb::{Argb, ParseColorError};
pub use luminance::{adjust_lightness, perceived_luminance, BandError, LuminanceBand};

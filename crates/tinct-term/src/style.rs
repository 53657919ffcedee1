// SPDX-License-Identifier: MIT
//
// Named terminal colors, attribute flags, and the `Style` they form.
//
// The color set is the classic sixteen-entry terminal palette, addressed
// by the names log tooling has used for decades ("red", "light_blue",
// "dark_grey", ...). Names are case-sensitive and resolve through
// `FromStr`; an unrecognized name is an error carried back to the
// caller, not a silent fallback.
//
// Discriminants are the SGR foreground codes, so encoding a color is a
// cast and background codes are a fixed offset away.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::ansi;

// ─── AnsiColor ───────────────────────────────────────────────────────────────

/// The sixteen named terminal colors.
///
/// Each variant's discriminant is its SGR foreground code: 30–37 for the
/// standard intensity set, 90–97 for the bright set. `White` is bright
/// white (97); the dimmer variant terminals render for SGR 37 goes by
/// `LightGrey`. The name `grey` parses as an alias of `black`, kept for
/// rule files written against the traditional table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnsiColor {
    /// SGR 30.
    Black = 30,
    /// SGR 31.
    Red = 31,
    /// SGR 32.
    Green = 32,
    /// SGR 33.
    Yellow = 33,
    /// SGR 34.
    Blue = 34,
    /// SGR 35.
    Magenta = 35,
    /// SGR 36.
    Cyan = 36,
    /// SGR 37.
    LightGrey = 37,
    /// SGR 90.
    DarkGrey = 90,
    /// SGR 91.
    LightRed = 91,
    /// SGR 92.
    LightGreen = 92,
    /// SGR 93.
    LightYellow = 93,
    /// SGR 94.
    LightBlue = 94,
    /// SGR 95.
    LightMagenta = 95,
    /// SGR 96.
    LightCyan = 96,
    /// SGR 97.
    White = 97,
}

impl AnsiColor {
    /// Every palette entry, in SGR code order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::LightGrey,
        Self::DarkGrey,
        Self::LightRed,
        Self::LightGreen,
        Self::LightYellow,
        Self::LightBlue,
        Self::LightMagenta,
        Self::LightCyan,
        Self::White,
    ];

    /// The SGR code that sets this color as the foreground.
    #[inline]
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        self as u8
    }

    /// The SGR code that sets this color as the background.
    ///
    /// Background codes are the foreground codes shifted by 10
    /// (40–47, 100–107).
    #[inline]
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    /// The canonical name this color parses from.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::LightGrey => "light_grey",
            Self::DarkGrey => "dark_grey",
            Self::LightRed => "light_red",
            Self::LightGreen => "light_green",
            Self::LightYellow => "light_yellow",
            Self::LightBlue => "light_blue",
            Self::LightMagenta => "light_magenta",
            Self::LightCyan => "light_cyan",
            Self::White => "white",
        }
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnsiColor {
    type Err = UnknownColorError;

    /// Resolve a color name. Names are lowercase and case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" | "grey" => Ok(Self::Black),
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "blue" => Ok(Self::Blue),
            "magenta" => Ok(Self::Magenta),
            "cyan" => Ok(Self::Cyan),
            "light_grey" => Ok(Self::LightGrey),
            "dark_grey" => Ok(Self::DarkGrey),
            "light_red" => Ok(Self::LightRed),
            "light_green" => Ok(Self::LightGreen),
            "light_yellow" => Ok(Self::LightYellow),
            "light_blue" => Ok(Self::LightBlue),
            "light_magenta" => Ok(Self::LightMagenta),
            "light_cyan" => Ok(Self::LightCyan),
            "white" => Ok(Self::White),
            _ => Err(UnknownColorError::new(s)),
        }
    }
}

// ─── UnknownColorError ───────────────────────────────────────────────────────

/// Error returned when a color name is not in the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorError {
    name: String,
}

impl UnknownColorError {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name: {:?}", self.name)
    }
}

impl std::error::Error for UnknownColorError {}

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters
    /// in the ANSI escape sequence standard. Combine with bitwise OR:
    ///
    /// ```
    /// use tinct_term::style::Attr;
    ///
    /// let style = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD          = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM           = 1 << 1;
        /// SGR 3 — italic or oblique.
        const ITALIC        = 1 << 2;
        /// SGR 4 — straight underline.
        const UNDERLINE     = 1 << 3;
        /// SGR 5 — slow blink.
        const BLINK         = 1 << 4;
        /// SGR 7 — swap foreground and background.
        const INVERSE       = 1 << 5;
        /// SGR 8 — invisible text (not widely supported).
        const HIDDEN        = 1 << 6;
        /// SGR 9 — crossed-out text.
        const STRIKETHROUGH = 1 << 7;
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// A terminal text style: optional foreground, optional background, and
/// attribute flags.
///
/// The default style is plain — painting with it writes the text bytes
/// untouched, with no escape sequences at all. Any non-plain style wraps
/// the text between its SGR codes and a single trailing reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<AnsiColor>,
    /// Background color, if set.
    pub bg: Option<AnsiColor>,
    /// Attribute flags.
    pub attrs: Attr,
}

impl Style {
    /// The plain style: no colors, no attributes.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: Attr::empty(),
        }
    }

    /// Return a copy with the foreground color set.
    #[inline]
    #[must_use]
    pub const fn with_fg(self, color: AnsiColor) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a copy with the background color set.
    #[inline]
    #[must_use]
    pub const fn with_bg(self, color: AnsiColor) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Return a copy with the given attribute flags added.
    #[inline]
    #[must_use]
    pub const fn with_attrs(self, attrs: Attr) -> Self {
        Self {
            attrs: self.attrs.union(attrs),
            ..self
        }
    }

    /// Whether this style changes nothing.
    #[inline]
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Write `text` wrapped in this style's escape sequences.
    ///
    /// Emits foreground, background, and attribute codes in that order,
    /// then the text, then a single SGR reset. A plain style writes the
    /// text bytes unchanged.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn paint(self, w: &mut impl Write, text: &str) -> io::Result<()> {
        if self.is_plain() {
            return w.write_all(text.as_bytes());
        }

        if let Some(color) = self.fg {
            ansi::fg(w, color)?;
        }
        if let Some(color) = self.bg {
            ansi::bg(w, color)?;
        }
        ansi::attrs(w, self.attrs)?;
        w.write_all(text.as_bytes())?;
        ansi::reset(w)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

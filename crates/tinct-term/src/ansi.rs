// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write SGR (Select Graphic Rendition) sequences to
// any `impl Write`. No state, no decisions about what deserves color —
// that's the highlighting layer's job. This module just knows the
// byte-level encoding of the terminal commands we need.
//
// All functions return `io::Result` propagated from the underlying
// writer. In practice they never fail when writing to a `Vec<u8>`.

use std::io::{self, Write};

use crate::style::{AnsiColor, Attr};

// ─── Reset ───────────────────────────────────────────────────────────────────

/// Reset all SGR attributes to terminal defaults (SGR 0).
///
/// This clears **everything**: colors, bold, underline — all of it.
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground (text) color.
///
/// Uses the compact SGR codes for the sixteen named colors: 30–37 for
/// the standard set, 90–97 for the bright set.
#[inline]
pub fn fg(w: &mut impl Write, color: AnsiColor) -> io::Result<()> {
    write!(w, "\x1b[{}m", color.fg_code())
}

// ─── Background Color ────────────────────────────────────────────────────────

/// Set the background color.
///
/// Same encoding strategy as [`fg`] shifted into the background range
/// (40–47, 100–107).
#[inline]
pub fn bg(w: &mut impl Write, color: AnsiColor) -> io::Result<()> {
    write!(w, "\x1b[{}m", color.bg_code())
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;3;9m` for
/// bold + italic + strikethrough. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    w.write_all(b"\x1b[")?;
    let mut first = true;

    macro_rules! emit {
        ($flag:expr, $code:expr) => {
            if attr.contains($flag) {
                if !first {
                    w.write_all(b";")?;
                }
                w.write_all($code)?;
                first = false;
            }
        };
    }

    emit!(Attr::BOLD, b"1");
    emit!(Attr::DIM, b"2");
    emit!(Attr::ITALIC, b"3");
    emit!(Attr::UNDERLINE, b"4");
    emit!(Attr::BLINK, b"5");
    emit!(Attr::INVERSE, b"7");
    emit!(Attr::HIDDEN, b"8");
    emit!(Attr::STRIKETHROUGH, b"9");
    let _ = first; // Last expansion sets first; suppress dead-write warning.

    w.write_all(b"m")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

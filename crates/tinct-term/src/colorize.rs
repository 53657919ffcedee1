// SPDX-License-Identifier: MIT
//
// Keyword highlighting over free-form text.
//
// The text splits into tokens — maximal word runs and single non-word
// characters — and tokens that exactly equal a rule keyword get painted
// in the rule's color. Everything else passes through byte-for-byte,
// whitespace and punctuation included, so uncolored output is identical
// to the input and colored output differs only by the escape sequences.

use std::fmt;
use std::io::{self, Write};
use std::sync::LazyLock;

use regex::Regex;

use crate::rules::RuleSet;
use crate::style::{AnsiColor, Style, UnknownColorError};

/// Maximal word runs or single non-word characters, in input order.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+|\W").expect("valid regex"));

/// Split `text` into tokens: maximal `\w+` runs and single non-word
/// characters, Unicode-aware. Every byte of the input lands in exactly
/// one token, so concatenating them reproduces `text`.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

/// Write `text` with every token that matches a rule wrapped in that
/// rule's color escape.
///
/// Matching is exact and case-sensitive against whole tokens, so `error`
/// inside `errors` stays unpainted. Color names resolve lazily: a rule
/// naming an unknown color is only an error once a token matches its
/// keyword.
///
/// # Errors
///
/// [`ColorizeError::UnknownColor`] when a matched rule's color is not in
/// the palette; [`ColorizeError::Io`] when the writer fails.
pub fn colorize(w: &mut impl Write, text: &str, rules: &RuleSet) -> Result<(), ColorizeError> {
    for token in tokenize(text) {
        match rules.color_for(token) {
            Some(name) => {
                let color: AnsiColor = name.parse()?;
                Style::new().with_fg(color).paint(w, token)?;
            }
            None => w.write_all(token.as_bytes())?,
        }
    }
    Ok(())
}

// ─── ColorizeError ───────────────────────────────────────────────────────────

/// Error from [`colorize`].
#[derive(Debug)]
pub enum ColorizeError {
    /// A matched rule names a color outside the terminal palette.
    UnknownColor(UnknownColorError),
    /// The underlying writer failed.
    Io(io::Error),
}

impl fmt::Display for ColorizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownColor(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ColorizeError {}

impl From<UnknownColorError> for ColorizeError {
    fn from(e: UnknownColorError) -> Self {
        Self::UnknownColor(e)
    }
}

impl From<io::Error> for ColorizeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

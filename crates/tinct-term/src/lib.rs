// SPDX-License-Identifier: MIT
//
// tinct-term — terminal coloring for tinct.
//
// Wraps keywords in ANSI SGR escape sequences so a log file reads at a
// glance in a terminal or pager. The layers, bottom to top:
//
//   ansi.rs:     byte-level SGR emission to any `impl Write`
//   style.rs:    the sixteen named colors, attribute flags, `Style`
//   rules.rs:    keyword → color-name rules and the dict-literal parser
//   colorize.rs: tokenize text and paint the tokens the rules match
//
// This crate intentionally avoids terminal-manipulation frameworks
// (crossterm, termion) in favor of writing the escape bytes directly.
// Rules carry color *names*, not resolved colors: a rule naming a bogus
// color only fails once a token actually matches its keyword.

pub mod ansi;
pub mod colorize;
pub mod rules;
pub mod style;

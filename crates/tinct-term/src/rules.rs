// SPDX-License-Identifier: MIT
//
// Highlighting rules — which tokens get painted, and in what color.
//
// A rule maps an exact keyword to a color *name*. Names stay unresolved
// here on purpose: resolution happens at paint time, so a rule set can
// carry a bogus color without failing until a token actually matches it.
//
// Rule sets come from two places: the built-in defaults, or a dict
// literal passed on the command line in the shape log tooling has always
// used — `{'error': 'red', 'warn': 'yellow'}`. The parser accepts single
// or double quotes, arbitrary whitespace, and a trailing comma, and
// rejects everything else.

use std::fmt;
use std::slice;

// ─── Rule ────────────────────────────────────────────────────────────────────

/// A single highlighting rule: exact token → color name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Token to match, compared case-sensitively against whole tokens.
    pub keyword: String,
    /// Color name, resolved by [`AnsiColor`](crate::style::AnsiColor)
    /// when a token matches.
    pub color: String,
}

// ─── RuleSet ─────────────────────────────────────────────────────────────────

/// An ordered collection of highlighting rules.
///
/// Insertion order is preserved. Inserting a keyword that is already
/// present replaces its color in place, keeping the original position —
/// the same shape a dict literal with a repeated key collapses to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// An empty rule set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule, replacing the color in place if `keyword` is already
    /// present.
    pub fn insert(&mut self, keyword: &str, color: &str) {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.keyword == keyword) {
            rule.color = color.to_owned();
        } else {
            self.rules.push(Rule {
                keyword: keyword.to_owned(),
                color: color.to_owned(),
            });
        }
    }

    /// Look up the color name for a token. Exact, case-sensitive match.
    #[must_use]
    pub fn color_for(&self, token: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.keyword == token)
            .map(|r| r.color.as_str())
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate the rules in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Parse a rule set from a dict literal.
    ///
    /// The accepted grammar is the familiar one-level dict of strings:
    ///
    /// ```text
    /// { 'keyword' : 'color' , "keyword" : "color" , }
    /// ```
    ///
    /// Quotes may be single or double (mixed freely), whitespace is
    /// ignored everywhere outside quotes, a trailing comma is allowed,
    /// and `{}` yields an empty set. Repeated keywords keep the first
    /// position with the last color. Quoted strings have no escape
    /// sequences; a quote character simply ends the string.
    ///
    /// # Errors
    ///
    /// Returns [`RulesParseError`] locating the first offending byte.
    pub fn from_literal(src: &str) -> Result<Self, RulesParseError> {
        let mut scan = Scanner::new(src);
        let mut rules = Self::new();

        scan.skip_ws();
        scan.expect(b'{', "`{`")?;
        scan.skip_ws();

        if !scan.eat(b'}') {
            loop {
                let keyword = scan.quoted()?;
                scan.skip_ws();
                scan.expect(b':', "`:`")?;
                scan.skip_ws();
                let color = scan.quoted()?;
                rules.insert(keyword, color);
                scan.skip_ws();

                if scan.eat(b',') {
                    scan.skip_ws();
                    if scan.eat(b'}') {
                        break;
                    }
                    continue;
                }
                scan.expect(b'}', "`,` or `}`")?;
                break;
            }
        }

        scan.skip_ws();
        if scan.at_end() {
            Ok(rules)
        } else {
            Err(scan.error("end of input"))
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The rules applied when the caller supplies none:
/// `error` → red, `warn` → yellow, `info` → blue.
#[must_use]
pub fn default_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert("error", "red");
    rules.insert("warn", "yellow");
    rules.insert("info", "blue");
    rules
}

// ─── RulesParseError ─────────────────────────────────────────────────────────

/// Error returned for a malformed rules literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesParseError {
    pos: usize,
    expected: &'static str,
}

impl RulesParseError {
    /// Byte offset of the first offending character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }
}

impl fmt::Display for RulesParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed rules literal at byte {}: expected {}",
            self.pos, self.expected
        )
    }
}

impl std::error::Error for RulesParseError {}

// ─── Scanner ─────────────────────────────────────────────────────────────────

/// Byte-position scanner over the literal source.
///
/// All structural characters are ASCII, so scanning advances by bytes;
/// string contents are sliced back out of the source, which keeps
/// multi-byte keywords intact without ever splitting a UTF-8 sequence
/// (an ASCII byte can only match at a character boundary).
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Consume `byte` if it is next. Returns whether it was consumed.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `byte` or fail with what was `expected`.
    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), RulesParseError> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    /// Consume a quoted string (either quote kind) and return its contents.
    fn quoted(&mut self) -> Result<&'a str, RulesParseError> {
        let quote = match self.peek() {
            Some(q @ (b'\'' | b'"')) => q,
            _ => return Err(self.error("a quoted string")),
        };
        self.pos += 1;

        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == quote {
                let contents = &self.src[start..self.pos];
                self.pos += 1;
                return Ok(contents);
            }
            self.pos += 1;
        }
        Err(self.error("a closing quote"))
    }

    const fn error(&self, expected: &'static str) -> RulesParseError {
        RulesParseError {
            pos: self.pos,
            expected,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(rules: &RuleSet) -> Vec<(&str, &str)> {
        rules
            .iter()
            .map(|r| (r.keyword.as_str(), r.color.as_str()))
            .collect()
    }

    // ── Defaults ────────────────────────────────────────────────────────

    #[test]
    fn default_rules_content_and_order() {
        let rules = default_rules();
        assert_eq!(
            pairs(&rules),
            vec![("error", "red"), ("warn", "yellow"), ("info", "blue")]
        );
    }

    // ── Insert / lookup ─────────────────────────────────────────────────

    #[test]
    fn insert_preserves_order() {
        let mut rules = RuleSet::new();
        rules.insert("b", "blue");
        rules.insert("a", "red");
        assert_eq!(pairs(&rules), vec![("b", "blue"), ("a", "red")]);
    }

    #[test]
    fn insert_existing_replaces_in_place() {
        let mut rules = default_rules();
        rules.insert("warn", "magenta");
        assert_eq!(
            pairs(&rules),
            vec![("error", "red"), ("warn", "magenta"), ("info", "blue")]
        );
    }

    #[test]
    fn color_for_is_exact_and_case_sensitive() {
        let rules = default_rules();
        assert_eq!(rules.color_for("error"), Some("red"));
        assert_eq!(rules.color_for("Error"), None);
        assert_eq!(rules.color_for("errors"), None);
        assert_eq!(rules.color_for(""), None);
    }

    #[test]
    fn empty_set_reports_empty() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert_eq!(rules.len(), 0);
        assert_eq!(default_rules().len(), 3);
    }

    #[test]
    fn ruleset_iterates_by_reference() {
        let rules = default_rules();
        let mut keywords = Vec::new();
        for rule in &rules {
            keywords.push(rule.keyword.as_str());
        }
        assert_eq!(keywords, vec!["error", "warn", "info"]);
    }

    // ── Literal parsing — accepted forms ────────────────────────────────

    #[test]
    fn literal_single_quotes() {
        let rules = RuleSet::from_literal("{'error': 'red', 'info': 'blue'}").unwrap();
        assert_eq!(pairs(&rules), vec![("error", "red"), ("info", "blue")]);
    }

    #[test]
    fn literal_double_quotes() {
        let rules = RuleSet::from_literal(r#"{"warn": "yellow"}"#).unwrap();
        assert_eq!(pairs(&rules), vec![("warn", "yellow")]);
    }

    #[test]
    fn literal_mixed_quotes() {
        let rules = RuleSet::from_literal(r#"{'error': "red", "info": 'blue'}"#).unwrap();
        assert_eq!(pairs(&rules), vec![("error", "red"), ("info", "blue")]);
    }

    #[test]
    fn literal_tolerates_whitespace() {
        let rules = RuleSet::from_literal("  {\n  'a' :\t'red' ,\n  'b' : 'blue'\n}  ").unwrap();
        assert_eq!(pairs(&rules), vec![("a", "red"), ("b", "blue")]);
    }

    #[test]
    fn literal_trailing_comma() {
        let rules = RuleSet::from_literal("{'a': 'red',}").unwrap();
        assert_eq!(pairs(&rules), vec![("a", "red")]);
    }

    #[test]
    fn literal_empty_dict() {
        let rules = RuleSet::from_literal("{}").unwrap();
        assert!(rules.is_empty());
        let rules = RuleSet::from_literal("  { }  ").unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn literal_repeated_key_keeps_first_position_last_color() {
        let rules = RuleSet::from_literal("{'a': 'red', 'b': 'blue', 'a': 'green'}").unwrap();
        assert_eq!(pairs(&rules), vec![("a", "green"), ("b", "blue")]);
    }

    #[test]
    fn literal_non_ascii_keyword() {
        let rules = RuleSet::from_literal("{'błąd': 'red'}").unwrap();
        assert_eq!(rules.color_for("błąd"), Some("red"));
    }

    #[test]
    fn literal_does_not_validate_color_names() {
        // Color names resolve at paint time, not parse time.
        let rules = RuleSet::from_literal("{'a': 'notacolor'}").unwrap();
        assert_eq!(rules.color_for("a"), Some("notacolor"));
    }

    // ── Literal parsing — rejected forms ────────────────────────────────

    #[test]
    fn literal_rejects_empty_input() {
        assert!(RuleSet::from_literal("").is_err());
        assert!(RuleSet::from_literal("   ").is_err());
    }

    #[test]
    fn literal_rejects_missing_braces() {
        assert!(RuleSet::from_literal("'a': 'red'").is_err());
        assert!(RuleSet::from_literal("{'a': 'red'").is_err());
        assert!(RuleSet::from_literal("['a', 'red']").is_err());
    }

    #[test]
    fn literal_rejects_unquoted_words() {
        assert!(RuleSet::from_literal("{a: 'red'}").is_err());
        assert!(RuleSet::from_literal("{'a': red}").is_err());
    }

    #[test]
    fn literal_rejects_missing_colon() {
        assert!(RuleSet::from_literal("{'a' 'red'}").is_err());
        assert!(RuleSet::from_literal("{'a', 'red'}").is_err());
    }

    #[test]
    fn literal_rejects_unterminated_string() {
        assert!(RuleSet::from_literal("{'a: 'red'}").is_err());
        assert!(RuleSet::from_literal("{'a': 'red}").is_err());
    }

    #[test]
    fn literal_rejects_trailing_junk() {
        assert!(RuleSet::from_literal("{'a': 'red'} extra").is_err());
        assert!(RuleSet::from_literal("{}{}").is_err());
    }

    #[test]
    fn literal_rejects_nested_values() {
        assert!(RuleSet::from_literal("{'a': {'b': 'red'}}").is_err());
    }

    #[test]
    fn parse_error_reports_position() {
        let err = RuleSet::from_literal("{'a' 'red'}").unwrap_err();
        assert_eq!(err.position(), 5);
        assert_eq!(
            err.to_string(),
            "malformed rules literal at byte 5: expected `:`"
        );
    }
}

//! Wildcard pattern compiler
//!
//! Patterns use the description-file wildcard syntax:
//!
//! - `**` matches any run of characters, including `/`
//! - `*` matches any run of characters within a single path segment
//!
//! Every other character matches itself. A compiled pattern keeps the byte
//! offset of its first wildcard marker, which virtual path rules use to decide
//! how much of a matched path survives as the leaf.
//!
//! # Example
//!
//! ```
//! use solgen_fs::WildcardPattern;
//!
//! let pattern = WildcardPattern::compile("src/**.h").unwrap();
//! assert!(pattern.is_match("src/include/hello.h"));
//! assert_eq!(pattern.marker(), Some(4));
//! ```

use regex::Regex;

use crate::{Error, Result};

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    ignore_case: bool,
    /// Anchored at the start only
    prefix: Regex,
    /// Anchored at both ends
    exact: Regex,
    marker: Option<usize>,
    runs: usize,
}

impl WildcardPattern {
    /// Compile a case-sensitive pattern.
    pub fn compile(pattern: &str) -> Result<Self> {
        Self::build(pattern, false)
    }

    /// Compile a pattern that ignores ASCII and Unicode case.
    pub fn compile_ignore_case(pattern: &str) -> Result<Self> {
        Self::build(pattern, true)
    }

    fn build(pattern: &str, ignore_case: bool) -> Result<Self> {
        let body = translate(pattern);
        let flags = if ignore_case { "(?i)" } else { "" };

        let compile = |expr: String| {
            Regex::new(&expr).map_err(|e| Error::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        };

        Ok(Self {
            source: pattern.to_string(),
            ignore_case,
            prefix: compile(format!("{flags}^(?:{body})"))?,
            exact: compile(format!("{flags}^(?:{body})$"))?,
            marker: pattern.find('*'),
            runs: count_runs(pattern),
        })
    }

    /// The pattern text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern matches a prefix of `text` starting at its first byte.
    pub fn is_prefix_match(&self, text: &str) -> bool {
        self.prefix.is_match(text)
    }

    /// Whether the pattern matches the whole of `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.exact.is_match(text)
    }

    /// Byte offset of the first wildcard marker, if any.
    pub fn marker(&self) -> Option<usize> {
        self.marker
    }

    /// Byte offset of the first wildcard marker, or the pattern length.
    pub fn marker_or_len(&self) -> usize {
        self.marker.unwrap_or(self.source.len())
    }

    /// Number of separate wildcard runs (`a/*` has one, `*/b/**` has two).
    pub fn wildcard_runs(&self) -> usize {
        self.runs
    }

    /// Whether the pattern contains any wildcard marker.
    pub fn has_wildcard(&self) -> bool {
        self.marker.is_some()
    }
}

impl PartialEq for WildcardPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.ignore_case == other.ignore_case
    }
}

impl Eq for WildcardPattern {}

impl std::fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Translate wildcard syntax into a regular expression body.
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();
    let mut buf = [0u8; 4];

    while let Some(c) = chars.next() {
        if c != '*' {
            out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            continue;
        }
        if chars.peek() == Some(&'*') {
            while chars.peek() == Some(&'*') {
                chars.next();
            }
            out.push_str(".*");
        } else {
            out.push_str("[^/]*");
        }
    }
    out
}

fn count_runs(pattern: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in pattern.chars() {
        if c == '*' {
            if !in_run {
                runs += 1;
            }
            in_run = true;
        } else {
            in_run = false;
        }
    }
    runs
}

//! Virtual path rewrite rules
//!
//! A rule pairs a replacement stem with the wildcard patterns it captures.
//! With stem `Headers/*` and pattern `src/**.h`, the file
//! `src/include/hello.h` is displayed as `Headers/include/hello.h`. A stem
//! without a wildcard marker flattens every capture into a single folder.

use solgen_fs::WildcardPattern;

use crate::{Error, Result};

/// A compiled virtual path rule.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualPathRule {
    stem: String,
    patterns: Vec<WildcardPattern>,
}

impl VirtualPathRule {
    /// Compile a rule.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedWildcard` when the stem or a pattern holds
    /// more than one wildcard run. Only the first marker position is
    /// meaningful for leaf extraction, so `a/*/b/*` has no defined mapping.
    /// A stem wildcard must also end the stem, since the leaf is appended
    /// where the marker stood.
    pub fn new<I, S>(stem: impl Into<String>, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stem = stem.into();
        if has_multiple_runs(&stem) {
            return Err(Error::UnsupportedWildcard {
                pattern: stem,
                reason: "replacement stem holds more than one wildcard".into(),
            });
        }
        if stem.contains('*') && !stem.ends_with('*') {
            return Err(Error::UnsupportedWildcard {
                pattern: stem,
                reason: "wildcard in replacement stem must end it".into(),
            });
        }

        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = WildcardPattern::compile(pattern.as_ref())?;
            if pattern.wildcard_runs() > 1 {
                return Err(Error::UnsupportedWildcard {
                    pattern: pattern.as_str().to_string(),
                    reason: "match pattern holds more than one wildcard".into(),
                });
            }
            compiled.push(pattern);
        }

        Ok(Self {
            stem,
            patterns: compiled,
        })
    }

    /// The replacement stem as declared.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The stem with its wildcard marker removed.
    pub fn stem_prefix(&self) -> String {
        self.stem.replace('*', "")
    }

    /// Whether captures collapse to their bare file name.
    pub fn is_flat(&self) -> bool {
        !self.stem.contains('*')
    }

    pub fn patterns(&self) -> &[WildcardPattern] {
        &self.patterns
    }
}

fn has_multiple_runs(text: &str) -> bool {
    match (text.find('*'), text.rfind('*')) {
        (Some(first), Some(last)) => text[first..=last].contains(|c: char| c != '*'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_stems() {
        assert!(VirtualPathRule::new("", ["vendor/*"]).unwrap().is_flat());
        assert!(VirtualPathRule::new("Docs", ["*.md"]).unwrap().is_flat());
        assert!(!VirtualPathRule::new("Headers/*", ["**.h"]).unwrap().is_flat());
    }

    #[test]
    fn test_stem_prefix_drops_marker() {
        let rule = VirtualPathRule::new("Headers/**", ["**.h"]).unwrap();
        assert_eq!(rule.stem_prefix(), "Headers/");
    }

    #[test]
    fn test_multiple_pattern_runs_rejected() {
        let err = VirtualPathRule::new("X", ["src/*/include/*.h"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedWildcard { .. }));
    }

    #[test]
    fn test_multiple_stem_runs_rejected() {
        let err = VirtualPathRule::new("a/*/b/*", ["src/*"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedWildcard { .. }));
    }

    #[test]
    fn test_inner_stem_wildcard_rejected() {
        let err = VirtualPathRule::new("Src/*/Files", ["src/*"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedWildcard { .. }));
        assert!(VirtualPathRule::new("*", ["src/**.h"]).is_ok());
        assert!(VirtualPathRule::new("Src/**", ["src/**.h"]).is_ok());
    }

    #[test]
    fn test_has_multiple_runs() {
        assert!(!has_multiple_runs("plain"));
        assert!(!has_multiple_runs("a/**"));
        assert!(has_multiple_runs("*/*"));
    }
}

//! Declared configuration blocks
//!
//! A block is a set of settings guarded by filter terms. It applies to an
//! axis scope when every term matches one of the scope's tokens. Terms are
//! case-insensitive wildcard patterns and may be negated with a `not ` prefix.

use serde_json::{Map, Value};
use solgen_fs::WildcardPattern;
use solgen_fs::path::final_component;

use crate::Result;

/// One filter term of a configuration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pattern: WildcardPattern,
    negated: bool,
}

impl Term {
    /// Parse a term such as `Debug`, `win*` or `not macosx`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let (negated, body) = match text.strip_prefix("not ") {
            Some(rest) => (true, rest.trim()),
            None => (false, text),
        };
        Ok(Self {
            pattern: WildcardPattern::compile_ignore_case(body)?,
            negated,
        })
    }

    /// Whether the term holds against the given scope tokens.
    pub fn matches(&self, tokens: &[&str]) -> bool {
        let hit = tokens.iter().any(|token| self.pattern.is_match(token));
        hit != self.negated
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// A block of settings declared on a solution or project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigBlock {
    terms: Vec<Term>,
    files: Vec<WildcardPattern>,
    settings: Map<String, Value>,
}

impl ConfigBlock {
    /// Create an unconditional block.
    pub fn new(settings: Map<String, Value>) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Guard the block with filter terms; every term must match.
    pub fn with_terms<I, S>(mut self, terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.terms.push(Term::parse(term.as_ref())?);
        }
        Ok(self)
    }

    /// Restrict the block to files matching one of `patterns`.
    pub fn with_files<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.files.push(WildcardPattern::compile(pattern.as_ref())?);
        }
        Ok(self)
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn files(&self) -> &[WildcardPattern] {
        &self.files
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }

    /// Whether the block contributes to a bake over `tokens`.
    ///
    /// File-scoped blocks only apply when a filename is supplied and matches
    /// one of their patterns, either in full or by its final component.
    pub fn applies_to(&self, tokens: &[&str], filename: Option<&str>) -> bool {
        if !self.terms.iter().all(|term| term.matches(tokens)) {
            return false;
        }
        if self.files.is_empty() {
            return true;
        }
        let Some(filename) = filename else {
            return false;
        };
        let name = final_component(filename);
        self.files
            .iter()
            .any(|pattern| pattern.is_match(filename) || pattern.is_match(name))
    }
}

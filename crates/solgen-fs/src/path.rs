//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Description files may be authored on any platform, so every path is
/// stored with forward slashes and only converted to the native form at
/// I/O boundaries. All path math here is lexical; nothing touches the disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes. Does not clean `.`/`..`
    /// segments; use [`NormalizedPath::clean`] for that.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path is rooted (`/x`, `//server/x` or `C:/x`).
    pub fn is_absolute(&self) -> bool {
        !self.split_root().0.is_empty()
    }

    /// Lexically resolve `.` and `..` segments and collapse repeated slashes.
    ///
    /// Leading `..` segments of a relative path are kept; on a rooted path
    /// they are dropped. An empty relative result becomes `.`.
    pub fn clean(&self) -> Self {
        let (root, rest) = self.split_root();
        let absolute = !root.is_empty();

        let mut parts: Vec<&str> = Vec::new();
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if parts.last().is_some_and(|last| *last != "..") {
                        parts.pop();
                    } else if !absolute {
                        parts.push("..");
                    }
                }
                other => parts.push(other),
            }
        }

        let body = parts.join("/");
        let inner = if absolute {
            format!("{root}{body}")
        } else if body.is_empty() {
            ".".to_string()
        } else {
            body
        };
        Self { inner }
    }

    /// Join this path with a segment.
    ///
    /// A rooted segment replaces the base entirely. The result is not cleaned.
    pub fn join(&self, segment: &str) -> Self {
        let segment = Self::new(segment);
        if segment.is_absolute() || self.inner.is_empty() {
            return segment;
        }
        Self {
            inner: join_segments(&self.inner, &segment.inner),
        }
    }

    /// Compute this path relative to `base`.
    ///
    /// Both sides are cleaned first. Paths on different roots (or a base that
    /// climbs above its own starting point) cannot be related and are returned
    /// cleaned but otherwise unchanged. Identical paths yield `.`.
    pub fn relative_to(&self, base: &NormalizedPath) -> NormalizedPath {
        let target = self.clean();
        let base = base.clean();

        let (target_root, target_rest) = target.split_root();
        let (base_root, base_rest) = base.split_root();
        if !target_root.eq_ignore_ascii_case(base_root) {
            return target.clone();
        }

        let target_parts = components(target_rest);
        let base_parts = components(base_rest);
        let common = target_parts
            .iter()
            .zip(&base_parts)
            .take_while(|(t, b)| t == b)
            .count();

        if base_parts[common..].contains(&"..") {
            return target.clone();
        }

        let mut parts = vec![".."; base_parts.len() - common];
        parts.extend_from_slice(&target_parts[common..]);
        if parts.is_empty() {
            Self::new(".")
        } else {
            Self {
                inner: parts.join("/"),
            }
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> &str {
        final_component(&self.inner)
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    /// Check if this is a file on disk.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Split into the root prefix (`""`, `/`, `//`, `C:/`) and the remainder.
    fn split_root(&self) -> (&str, &str) {
        let s = self.inner.as_str();
        if s.starts_with("//") {
            return s.split_at(2);
        }
        if s.starts_with('/') {
            return s.split_at(1);
        }
        let bytes = s.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            let end = if bytes.get(2) == Some(&b'/') { 3 } else { 2 };
            return s.split_at(end);
        }
        ("", s)
    }
}

/// The last `/`-separated component of a path string.
///
/// Trailing slashes are ignored, so `a/b/` yields `b`.
pub fn final_component(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Join two path strings with exactly one separator between them.
///
/// An empty side yields the other side unchanged.
pub fn join_segments(base: &str, leaf: &str) -> String {
    if base.is_empty() {
        return leaf.to_string();
    }
    if leaf.is_empty() {
        return base.to_string();
    }
    if base.ends_with('/') {
        format!("{base}{leaf}")
    } else {
        format!("{base}/{leaf}")
    }
}

/// Remove any number of leading `./` and `../` segments.
///
/// Used for display paths, where relative navigation noise is meaningless.
pub fn strip_leading_dot_segments(path: &str) -> &str {
    let mut rest = path;
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("../") {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

fn components(rest: &str) -> Vec<&str> {
    rest.split('/').filter(|s| !s.is_empty() && *s != ".").collect()
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_root_variants() {
        assert_eq!(NormalizedPath::new("/a/b").split_root(), ("/", "a/b"));
        assert_eq!(NormalizedPath::new("//srv/x").split_root(), ("//", "srv/x"));
        assert_eq!(NormalizedPath::new("C:\\a").split_root(), ("C:/", "a"));
        assert_eq!(NormalizedPath::new("a/b").split_root(), ("", "a/b"));
    }

    #[test]
    fn test_strip_leading_dot_segments_repeats() {
        assert_eq!(strip_leading_dot_segments("./../.././x/y"), "x/y");
        assert_eq!(strip_leading_dot_segments("x/./y"), "x/./y");
        assert_eq!(strip_leading_dot_segments(".hidden"), ".hidden");
    }

    #[test]
    fn test_join_segments_empty_sides() {
        assert_eq!(join_segments("", "a.c"), "a.c");
        assert_eq!(join_segments("Headers/", "a.h"), "Headers/a.h");
        assert_eq!(join_segments("Headers", ""), "Headers");
    }
}

//! Per-segment name matching.
//!
//! Segments are compared exactly and case-sensitively. A segment containing
//! `*`, `?` or `[` is treated as a shell glob instead.

use glob::{MatchOptions, Pattern};

use crate::error::{CoreError, CoreResult};

const GLOB_META: &[char] = &['*', '?', '['];

#[derive(Debug, Clone)]
pub enum SegmentMatcher {
    Exact(String),
    Glob(Pattern),
}

impl SegmentMatcher {
    pub fn parse(segment: &str) -> CoreResult<Self> {
        if segment.contains(GLOB_META) {
            let pattern = Pattern::new(segment).map_err(|e| {
                CoreError::InvalidPath(format!("bad pattern '{}': {}", segment, e))
            })?;
            Ok(Self::Glob(pattern))
        } else {
            Ok(Self::Exact(segment.to_string()))
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == name,
            Self::Glob(pattern) => pattern.matches_with(name, GLOB_OPTIONS),
        }
    }
}

// Names are single path segments, so `*` may match anything including '/'.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Splits a path into its non-empty `/`-separated segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_sensitive() {
        let matcher = SegmentMatcher::parse("Item-X").unwrap();
        assert!(matcher.matches("Item-X"));
        assert!(!matcher.matches("item-x"));
        assert!(!matcher.matches("Item-X2"));
    }

    #[test]
    fn glob_segments() {
        let matcher = SegmentMatcher::parse("ubuntu-*").unwrap();
        assert!(matches!(matcher, SegmentMatcher::Glob(_)));
        assert!(matcher.matches("ubuntu-22.04"));
        assert!(!matcher.matches("debian-12"));

        let single = SegmentMatcher::parse("disk?.vmdk").unwrap();
        assert!(single.matches("disk1.vmdk"));
        assert!(!single.matches("disk10.vmdk"));
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let err = SegmentMatcher::parse("bad[").unwrap_err();
        assert!(matches!(err, CoreError::InvalidPath(_)));
    }

    #[test]
    fn split_ignores_empty_segments() {
        assert_eq!(split_path("/content-A//item-X/"), vec!["content-A", "item-X"]);
        assert_eq!(split_path("content-A"), vec!["content-A"]);
        assert!(split_path("/").is_empty());
    }
}

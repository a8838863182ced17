//! Section marker tracking.
//!
//! Source authors divide sibling declarations into named sections with
//! `// MARK: Section name` comments. The indexer surfaces those as mark
//! records; the builder keeps one "currently active" [`SectionMark`] per
//! sibling level and stamps it onto every declaration created until the
//! next mark record supersedes it.

use serde::Serialize;

/// Literal prefix a mark comment must carry to start a new section.
const MARK_PREFIX: &str = "MARK: ";

/// The section heading in effect for a declaration.
///
/// The default instance means "no section"; it is what declarations carry
/// before the first `// MARK:` comment of their sibling level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionMark {
    /// Heading text, `None` when no mark is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SectionMark {
    /// Build a mark from a `// MARK:` comment's text.
    ///
    /// Returns `None` unless the text starts with the literal `MARK: `
    /// prefix. The prefix, Xcode's optional `- ` separator, and surrounding
    /// whitespace are stripped from the label.
    #[must_use]
    pub fn from_comment(name: &str) -> Option<Self> {
        let rest = name.strip_prefix(MARK_PREFIX)?;
        let label = rest.strip_prefix("- ").unwrap_or(rest).trim();
        Some(Self {
            label: Some(label.to_owned()),
        })
    }

    /// Whether this is the "no section" instance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_comment_strips_prefix() {
        let mark = SectionMark::from_comment("MARK: Lifecycle").unwrap();
        assert_eq!(mark.label.as_deref(), Some("Lifecycle"));
    }

    #[test]
    fn test_from_comment_strips_dash_separator() {
        let mark = SectionMark::from_comment("MARK: - Lifecycle").unwrap();
        assert_eq!(mark.label.as_deref(), Some("Lifecycle"));
    }

    #[test]
    fn test_from_comment_rejects_plain_comment() {
        assert_eq!(SectionMark::from_comment("TODO: later"), None);
        assert_eq!(SectionMark::from_comment("MARK:no space"), None);
    }

    #[test]
    fn test_from_comment_empty_remainder_is_an_empty_label() {
        // An empty `MARK: ` still replaces the active mark
        let mark = SectionMark::from_comment("MARK: ").unwrap();
        assert_eq!(mark.label.as_deref(), Some(""));
        assert!(!mark.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(SectionMark::default().is_empty());
    }
}

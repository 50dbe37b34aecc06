//! Story document parser.
//!
//! Extraction is tolerant: every field has a default and parsing never
//! fails. There is no structural validation of the document.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::entities::{Section, StoryRecord};

/// `# US-004: Bounded Queue Worker`
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# [A-Za-z]+-\d+: (.+)$").unwrap());

/// `**Label**: value` header lines, one pattern per scalar field.
static FIELD_PATTERNS: LazyLock<HeaderPatterns> = LazyLock::new(|| HeaderPatterns {
    status: field_pattern("Status"),
    category: field_pattern("Category"),
    effort: field_pattern("Effort"),
    sprint: field_pattern("Sprint"),
});

/// `## <Heading>` lines for each section, in canonical order.
static SECTION_PATTERNS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    Section::ALL
        .iter()
        .map(|&section| {
            let pattern = format!(r"(?m)^## {}\s*(?:\n|\z)", regex::escape(section.heading()));
            (section, Regex::new(&pattern).unwrap())
        })
        .collect()
});

struct HeaderPatterns {
    status: Regex,
    category: Regex,
    effort: Regex,
    sprint: Regex,
}

fn field_pattern(label: &str) -> Regex {
    Regex::new(&format!(r"\*\*{}\*\*: (.+)", regex::escape(label))).unwrap()
}

/// Parse one story document.
///
/// `story_id` comes from the file name, not the content.
pub fn parse_story(story_id: &str, content: &str) -> StoryRecord {
    let mut record = StoryRecord::new(story_id);

    if let Some(title) = first_capture(&TITLE_PATTERN, content) {
        record.title = title;
    }

    let fields = &*FIELD_PATTERNS;
    if let Some(status) = first_capture(&fields.status, content) {
        record.status = status;
    }
    if let Some(category) = first_capture(&fields.category, content) {
        record.category = category;
    }
    if let Some(effort) = first_capture(&fields.effort, content) {
        record.effort = effort;
    }
    if let Some(sprint) = first_capture(&fields.sprint, content) {
        record.sprint = sprint;
    }

    for (section, pattern) in SECTION_PATTERNS.iter() {
        record.set_section(*section, extract_section(pattern, content));
    }

    debug!(
        story_id = %record.id,
        title = %record.title,
        sections = record.sections.len(),
        "Parsed story"
    );

    record
}

/// Derive a story identifier from the first two `-`-separated parts of a
/// file stem: `US-001-core-package-setup.md` becomes `US-001`.
pub fn story_id_from_file_name(path: impl AsRef<Path>) -> String {
    let stem = path
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.split('-').take(2).collect::<Vec<_>>().join("-")
}

/// First match only. A blank value counts as missing so the field keeps
/// its default.
fn first_capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

fn extract_section(heading: &Regex, content: &str) -> String {
    let Some(found) = heading.find(content) else {
        return String::new();
    };

    let rest = &content[found.end()..];

    // The section runs until the next level-2 heading or end of document.
    let end = if rest.starts_with("## ") {
        0
    } else {
        rest.find("\n## ").unwrap_or(rest.len())
    };

    rest[..end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_STORY: &str = "# US-004: Bounded Queue Worker

**Status**: ✅ Complete
**Category**: Core Package
**Effort**: 8 story points
**Sprint**: 2

## Description

As a developer I want a bounded queue.

## Acceptance Criteria

- [ ] Queue rejects when full
- [x] Workers drain the queue

### Edge cases

Capacity of zero is invalid.

## Technical Requirements

Use a channel.

## Notes

Nothing else.
";

    #[test]
    fn test_parse_header_fields() {
        let record = parse_story("US-004", FULL_STORY);
        assert_eq!(record.id, "US-004");
        assert_eq!(record.title, "Bounded Queue Worker");
        assert_eq!(record.status, "✅ Complete");
        assert_eq!(record.category, "Core Package");
        assert_eq!(record.effort, "8 story points");
        assert_eq!(record.sprint, "2");
    }

    #[test]
    fn test_section_keeps_subheadings_and_blank_lines() {
        let record = parse_story("US-004", FULL_STORY);
        assert_eq!(
            record.section(Section::AcceptanceCriteria),
            "- [ ] Queue rejects when full\n- [x] Workers drain the queue\n\n### Edge cases\n\nCapacity of zero is invalid."
        );
        assert_eq!(record.section(Section::Notes), "Nothing else.");
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let record = parse_story("US-004", FULL_STORY);
        assert_eq!(record.section(Section::TestingRequirements), "");
        assert_eq!(record.section(Section::PerformanceRequirements), "");
        assert_eq!(record.section(Section::Dependencies), "");
        assert_eq!(record.section(Section::DefinitionOfDone), "");
        assert_eq!(record.section(Section::RelatedDocumentation), "");
        assert_eq!(record.sections.len(), 4);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let record = parse_story("US-010", "");
        assert_eq!(record, StoryRecord::new("US-010"));
    }

    #[test]
    fn test_first_title_wins() {
        let content = "# US-001: First\n\n# US-002: Second\n";
        assert_eq!(parse_story("US-001", content).title, "First");
    }

    #[test]
    fn test_title_requires_level_one_heading() {
        let content = "## US-001: Not a title\n";
        assert_eq!(parse_story("US-001", content).title, "Unknown Title");
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "# US-003: Windows Story\r\n**Sprint**: 3\r\n\r\n## Notes\r\n\r\nLine one.\r\n";
        let record = parse_story("US-003", content);
        assert_eq!(record.title, "Windows Story");
        assert_eq!(record.sprint, "3");
        assert_eq!(record.section(Section::Notes), "Line one.");
    }

    #[test]
    fn test_field_value_never_spans_lines() {
        let content = "**Category**: Documentation\nExtension Package\n";
        assert_eq!(parse_story("US-029", content).category, "Documentation");
    }

    #[test]
    fn test_blank_field_value_keeps_default() {
        let content = "# US-001:   \n**Status**:  \n**Category**: \t\n**Sprint**: 3\n";
        let record = parse_story("US-001", content);
        assert_eq!(record.title, "Unknown Title");
        assert_eq!(record.status, "❌ Not Started");
        assert_eq!(record.category, "Unknown");
        assert_eq!(record.sprint, "3");
    }

    #[test]
    fn test_empty_section_followed_by_heading() {
        let content = "## Description\n\n## Notes\n\nA note.\n";
        let record = parse_story("US-001", content);
        assert_eq!(record.section(Section::Description), "");
        assert_eq!(record.section(Section::Notes), "A note.");
    }

    #[test]
    fn test_heading_must_match_exactly() {
        let content = "## Descriptions\n\nplural\n\n## Description of work\n\nmore\n";
        let record = parse_story("US-001", content);
        assert!(!record.has_section(Section::Description));
    }

    #[test]
    fn test_deeper_heading_is_not_a_section() {
        let content = "### Notes\n\nhidden\n";
        assert_eq!(parse_story("US-001", content).section(Section::Notes), "");
    }

    #[test]
    fn test_section_at_end_of_document() {
        let content = "## Related Documentation\n\n- docs/architecture.md";
        assert_eq!(
            parse_story("US-001", content).section(Section::RelatedDocumentation),
            "- docs/architecture.md"
        );
    }

    #[test]
    fn test_story_id_from_file_name() {
        assert_eq!(
            story_id_from_file_name("docs/user-stories/US-001-core-package-setup.md"),
            "US-001"
        );
        assert_eq!(story_id_from_file_name("US-019.md"), "US-019");
    }
}

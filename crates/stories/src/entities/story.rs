//! Story record and section types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Title used when a document has no `# <ID>: <title>` heading
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Status used when a document has no `**Status**:` line
pub const DEFAULT_STATUS: &str = "❌ Not Started";

/// Fallback for category, effort and sprint
pub const UNKNOWN: &str = "Unknown";

/// Named free-text sections of a story document.
///
/// Variant order is the canonical order used when assembling issue bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Description,
    AcceptanceCriteria,
    TechnicalRequirements,
    TestingRequirements,
    PerformanceRequirements,
    Dependencies,
    DefinitionOfDone,
    Notes,
    #[serde(rename = "related_docs")]
    RelatedDocumentation,
}

impl Section {
    /// All sections in canonical order
    pub const ALL: [Section; 9] = [
        Self::Description,
        Self::AcceptanceCriteria,
        Self::TechnicalRequirements,
        Self::TestingRequirements,
        Self::PerformanceRequirements,
        Self::Dependencies,
        Self::DefinitionOfDone,
        Self::Notes,
        Self::RelatedDocumentation,
    ];

    /// Heading text as it appears after `## `
    pub fn heading(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::AcceptanceCriteria => "Acceptance Criteria",
            Self::TechnicalRequirements => "Technical Requirements",
            Self::TestingRequirements => "Testing Requirements",
            Self::PerformanceRequirements => "Performance Requirements",
            Self::Dependencies => "Dependencies",
            Self::DefinitionOfDone => "Definition of Done",
            Self::Notes => "Notes",
            Self::RelatedDocumentation => "Related Documentation",
        }
    }

    /// Snake-case key used in JSON output
    pub fn key(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::AcceptanceCriteria => "acceptance_criteria",
            Self::TechnicalRequirements => "technical_requirements",
            Self::TestingRequirements => "testing_requirements",
            Self::PerformanceRequirements => "performance_requirements",
            Self::Dependencies => "dependencies",
            Self::DefinitionOfDone => "definition_of_done",
            Self::Notes => "notes",
            Self::RelatedDocumentation => "related_docs",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.heading())
    }
}

/// Parsed contents of one story document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    /// Identifier derived from the file name (e.g. "US-004")
    pub id: String,

    /// Descriptive title from the level-1 heading
    pub title: String,

    /// Status as written in the document header
    pub status: String,

    /// Category as written in the document header
    pub category: String,

    /// Effort estimate as written in the document header
    pub effort: String,

    /// Sprint as written in the document header
    pub sprint: String,

    /// Present sections only; absent sections have no entry
    #[serde(default)]
    pub sections: BTreeMap<Section, String>,
}

impl StoryRecord {
    /// Create a record with every field at its default
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: UNKNOWN_TITLE.to_string(),
            status: DEFAULT_STATUS.to_string(),
            category: UNKNOWN.to_string(),
            effort: UNKNOWN.to_string(),
            sprint: UNKNOWN.to_string(),
            sections: BTreeMap::new(),
        }
    }

    /// Section text, or an empty string when the section is absent
    pub fn section(&self, section: Section) -> &str {
        self.sections.get(&section).map_or("", String::as_str)
    }

    /// Whether the section was found with non-empty content
    pub fn has_section(&self, section: Section) -> bool {
        !self.section(section).is_empty()
    }

    /// Store a section; empty text leaves the section absent
    pub fn set_section(&mut self, section: Section, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.sections.remove(&section);
        } else {
            self.sections.insert(section, text);
        }
    }

    /// First integer in the declared sprint text, if any.
    ///
    /// "3", "Sprint 3" and "3 (weeks 5-6)" all yield `Some(3)`.
    pub fn declared_sprint(&self) -> Option<u32> {
        let digits: String = self
            .sprint
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_uses_sentinels() {
        let record = StoryRecord::new("US-001");
        assert_eq!(record.title, "Unknown Title");
        assert_eq!(record.status, "❌ Not Started");
        assert_eq!(record.category, "Unknown");
        assert_eq!(record.effort, "Unknown");
        assert_eq!(record.sprint, "Unknown");
        assert!(record.sections.is_empty());
    }

    #[test]
    fn test_absent_section_is_empty_string() {
        let record = StoryRecord::new("US-001");
        for section in Section::ALL {
            assert_eq!(record.section(section), "");
            assert!(!record.has_section(section));
        }
    }

    #[test]
    fn test_set_empty_section_removes_it() {
        let mut record = StoryRecord::new("US-001");
        record.set_section(Section::Notes, "keep me");
        assert_eq!(record.section(Section::Notes), "keep me");

        record.set_section(Section::Notes, "");
        assert!(!record.has_section(Section::Notes));
    }

    #[test]
    fn test_declared_sprint() {
        let mut record = StoryRecord::new("US-001");
        assert_eq!(record.declared_sprint(), None);

        record.sprint = "3".to_string();
        assert_eq!(record.declared_sprint(), Some(3));

        record.sprint = "Sprint 10 (Weeks 19-20)".to_string();
        assert_eq!(record.declared_sprint(), Some(10));
    }

    #[test]
    fn test_section_order_is_canonical() {
        let mut sorted = Section::ALL;
        sorted.sort();
        assert_eq!(sorted, Section::ALL);
        assert_eq!(Section::ALL[0].heading(), "Description");
        assert_eq!(Section::ALL[8].heading(), "Related Documentation");
        assert_eq!(Section::RelatedDocumentation.key(), "related_docs");
    }

    #[test]
    fn test_serializes_section_keys() {
        let mut record = StoryRecord::new("US-002");
        record.set_section(Section::DefinitionOfDone, "- [ ] merged");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sections"]["definition_of_done"], "- [ ] merged");
    }
}

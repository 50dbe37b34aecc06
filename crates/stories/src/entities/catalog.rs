//! Static story catalog: completed stories and per-story metadata.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Planning metadata for one story
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryMetadata {
    /// Planned sprint number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<u32>,

    /// Story point estimate
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        rename = "storyPoints",
        alias = "sp"
    )]
    pub story_points: Option<u32>,

    /// Category used for label routing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl StoryMetadata {
    pub fn new(sprint: u32, story_points: u32, category: impl Into<String>) -> Self {
        Self {
            sprint: Some(sprint),
            story_points: Some(story_points),
            category: Some(category.into()),
        }
    }
}

static EMPTY_METADATA: StoryMetadata = StoryMetadata {
    sprint: None,
    story_points: None,
    category: None,
};

const BUILTIN_COMPLETED: &[&str] = &[
    "US-001", // Core Package Setup
    "US-002", // Auto-Managed Correlation
    "US-003", // Background Job Correlation
    "US-004", // Bounded Queue Worker
    "US-019", // HVO.Common Library
];

/// (id, sprint, story points, category)
const BUILTIN_METADATA: &[(&str, u32, u32, &str)] = &[
    ("US-001", 1, 3, "Core Package"),
    ("US-002", 1, 5, "Core Package"),
    ("US-003", 3, 5, "Core Package"),
    ("US-004", 2, 8, "Core Package"),
    ("US-005", 1, 5, "Core Package"),
    ("US-006", 2, 8, "Core Package"),
    ("US-007", 5, 3, "Core Package"),
    ("US-008", 5, 5, "Core Package"),
    ("US-009", 2, 5, "Core Package"),
    ("US-010", 3, 5, "Core Package"),
    ("US-011", 5, 5, "Core Package"),
    ("US-012", 3, 8, "Core Package"),
    ("US-013", 4, 5, "Core Package"),
    ("US-014", 6, 8, "Core Package"),
    ("US-015", 6, 5, "Core Package"),
    ("US-016", 4, 5, "Core Package"),
    ("US-017", 5, 3, "Core Package"),
    ("US-018", 4, 5, "Core Package"),
    ("US-019", 6, 5, "Extension Package"),
    ("US-020", 7, 3, "Extension Package"),
    ("US-021", 7, 5, "Extension Package"),
    ("US-022", 7, 8, "Extension Package"),
    ("US-023", 8, 3, "Extension Package"),
    ("US-024", 8, 5, "Extension Package"),
    ("US-025", 8, 5, "Extension Package"),
    ("US-026", 9, 30, "Testing & Samples"),
    ("US-027", 10, 13, "Testing & Samples"),
    ("US-028", 10, 13, "Testing & Samples"),
    ("US-029", 10, 8, "Documentation"),
    ("US-030", 10, 3, "Documentation"),
];

/// Completed-story set plus the metadata table used for labelling.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Identifiers of stories whose implementation is finished
    #[serde(default)]
    pub completed: BTreeSet<String>,

    /// Planning metadata keyed by story identifier
    #[serde(default)]
    pub metadata: BTreeMap<String, StoryMetadata>,
}

impl Catalog {
    /// Create a catalog from explicit data
    pub fn new(
        completed: impl IntoIterator<Item = String>,
        metadata: impl IntoIterator<Item = (String, StoryMetadata)>,
    ) -> Self {
        Self {
            completed: completed.into_iter().collect(),
            metadata: metadata.into_iter().collect(),
        }
    }

    /// The catalog shipped with the tool
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_COMPLETED.iter().map(ToString::to_string),
            BUILTIN_METADATA
                .iter()
                .map(|&(id, sprint, sp, category)| {
                    (id.to_string(), StoryMetadata::new(sprint, sp, category))
                }),
        )
    }

    /// Whether the story is marked complete
    pub fn is_complete(&self, story_id: &str) -> bool {
        self.completed.contains(story_id)
    }

    /// Metadata for a story; unknown stories get empty metadata
    pub fn metadata(&self, story_id: &str) -> &StoryMetadata {
        self.metadata.get(story_id).unwrap_or(&EMPTY_METADATA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.completed.len(), 5);
        assert_eq!(catalog.metadata.len(), 30);
        assert!(catalog.is_complete("US-019"));
        assert!(!catalog.is_complete("US-020"));

        let meta = catalog.metadata("US-026");
        assert_eq!(meta.sprint, Some(9));
        assert_eq!(meta.story_points, Some(30));
        assert_eq!(meta.category.as_deref(), Some("Testing & Samples"));
    }

    #[test]
    fn test_unknown_story_has_empty_metadata() {
        let catalog = Catalog::builtin();
        let meta = catalog.metadata("US-999");
        assert_eq!(*meta, StoryMetadata::default());
        assert!(!catalog.metadata.contains_key("US-999"));
    }

    #[test]
    fn test_deserialize_accepts_sp_alias() {
        let json = r#"{
            "completed": ["XX-001"],
            "metadata": {
                "XX-001": {"sprint": 4, "sp": 13, "category": "Documentation"},
                "XX-002": {"storyPoints": 2}
            }
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.is_complete("XX-001"));
        assert_eq!(catalog.metadata("XX-001").story_points, Some(13));
        assert_eq!(catalog.metadata("XX-002").story_points, Some(2));
        assert_eq!(catalog.metadata("XX-002").sprint, None);
    }
}

//! Label derivation from the story catalog.
//!
//! Labels come from the metadata table only; the sprint and category
//! declared inside the markdown are never consulted here.

use serde::Serialize;

use crate::entities::{Catalog, StoryMetadata};

/// Marker attached to every story issue
pub const BASE_LABEL: &str = "user-story";

pub const STATUS_COMPLETE: &str = "status:complete";
pub const STATUS_NOT_STARTED: &str = "status:not-started";

/// Category buckets, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGroup {
    CorePackage,
    ExtensionPackage,
    Testing,
    Documentation,
}

impl CategoryGroup {
    /// Route free-text category to a bucket. First matching rule wins.
    pub fn from_category(category: &str) -> Option<Self> {
        if category.contains("Core Package") {
            Some(Self::CorePackage)
        } else if category.contains("Extension Package") {
            Some(Self::ExtensionPackage)
        } else if category.contains("Testing") || category.contains("Samples") {
            Some(Self::Testing)
        } else if category.contains("Documentation") {
            Some(Self::Documentation)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CorePackage => "core-package",
            Self::ExtensionPackage => "extension-package",
            Self::Testing => "testing",
            Self::Documentation => "documentation",
        }
    }
}

/// Priority tiers, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
}

impl Priority {
    /// Threshold ladder: sprint 1-2 is P0, 3-4 is P1, 5-8 is P2.
    /// Anything later, and no sprint at all, is P3.
    pub fn from_sprint(sprint: Option<u32>) -> Self {
        match sprint {
            Some(s) if s <= 2 => Self::P0,
            Some(s) if s <= 4 => Self::P1,
            Some(s) if s <= 8 => Self::P2,
            _ => Self::P3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::P0 => "priority:p0",
            Self::P1 => "priority:p1",
            Self::P2 => "priority:p2",
            Self::P3 => "priority:p3",
        }
    }
}

/// Ordered label set. Pushing a label that is already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Labels(Vec<String>);

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.contains(&label) {
            self.0.push(label);
        }
    }

    fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    /// Comma-joined form used in console output
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Derive the labels for a story.
///
/// Stories without a metadata entry only get the base, status and
/// lowest-priority labels.
pub fn derive_labels(story_id: &str, catalog: &Catalog) -> Labels {
    labels_for(catalog.is_complete(story_id), catalog.metadata(story_id))
}

/// Label rules applied to already-resolved inputs.
///
/// A sprint or story-point value of zero counts as absent.
pub fn labels_for(complete: bool, metadata: &StoryMetadata) -> Labels {
    let mut labels = Labels::new();
    labels.push(BASE_LABEL);

    labels.push(if complete {
        STATUS_COMPLETE
    } else {
        STATUS_NOT_STARTED
    });

    if let Some(sp) = metadata.story_points.filter(|&sp| sp > 0) {
        labels.push(format!("sp-{sp}"));
    }

    let sprint = metadata.sprint.filter(|&s| s > 0);
    if let Some(sprint) = sprint {
        labels.push(format!("sprint-{sprint}"));
    }

    if let Some(group) = metadata
        .category
        .as_deref()
        .and_then(CategoryGroup::from_category)
    {
        labels.push(group.label());
    }

    labels.push(Priority::from_sprint(sprint).label());

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(sprint: Option<u32>, sp: Option<u32>, category: Option<&str>) -> StoryMetadata {
        StoryMetadata {
            sprint,
            story_points: sp,
            category: category.map(ToString::to_string),
        }
    }

    #[test]
    fn test_us_004_labels() {
        let catalog = Catalog::new(
            Vec::new(),
            vec![(
                "US-004".to_string(),
                StoryMetadata::new(2, 8, "Core Package"),
            )],
        );
        let labels = derive_labels("US-004", &catalog);
        assert_eq!(
            labels.into_vec(),
            [
                "user-story",
                "status:not-started",
                "sp-8",
                "sprint-2",
                "core-package",
                "priority:p0"
            ]
        );
    }

    #[test]
    fn test_completed_story_is_always_complete() {
        let catalog = Catalog::builtin();
        for id in ["US-001", "US-002", "US-003", "US-004", "US-019"] {
            let labels = derive_labels(id, &catalog);
            assert!(labels.contains(STATUS_COMPLETE), "{id}");
            assert!(!labels.contains(STATUS_NOT_STARTED), "{id}");
        }

        let bare = Catalog::new(vec!["ZZ-1".to_string()], Vec::new());
        let labels = derive_labels("ZZ-1", &bare);
        assert_eq!(
            labels.into_vec(),
            ["user-story", "status:complete", "priority:p3"]
        );
    }

    #[test]
    fn test_priority_ladder() {
        let cases = [
            (Some(1), Priority::P0),
            (Some(2), Priority::P0),
            (Some(3), Priority::P1),
            (Some(4), Priority::P1),
            (Some(5), Priority::P2),
            (Some(6), Priority::P2),
            (Some(7), Priority::P2),
            (Some(8), Priority::P2),
            (Some(9), Priority::P3),
            (Some(10), Priority::P3),
            (None, Priority::P3),
        ];
        for (sprint, expected) in cases {
            assert_eq!(Priority::from_sprint(sprint), expected, "sprint {sprint:?}");
        }
    }

    #[test]
    fn test_sprint_zero_counts_as_unknown() {
        let labels = labels_for(false, &meta(Some(0), Some(0), None));
        assert_eq!(
            labels.into_vec(),
            ["user-story", "status:not-started", "priority:p3"]
        );
    }

    #[test]
    fn test_category_routing_precedence() {
        assert_eq!(
            CategoryGroup::from_category("Testing & Documentation"),
            Some(CategoryGroup::Testing)
        );
        assert_eq!(
            CategoryGroup::from_category("Core Package / Extension Package"),
            Some(CategoryGroup::CorePackage)
        );
        assert_eq!(
            CategoryGroup::from_category("Samples"),
            Some(CategoryGroup::Testing)
        );
        assert_eq!(
            CategoryGroup::from_category("Documentation"),
            Some(CategoryGroup::Documentation)
        );
        assert_eq!(CategoryGroup::from_category("Infrastructure"), None);
        assert_eq!(CategoryGroup::from_category("core package"), None);
    }

    #[test]
    fn test_unrouted_category_emits_no_category_label() {
        let labels = labels_for(false, &meta(Some(7), Some(3), Some("Infrastructure")));
        assert_eq!(
            labels.into_vec(),
            [
                "user-story",
                "status:not-started",
                "sp-3",
                "sprint-7",
                "priority:p2"
            ]
        );
    }

    #[test]
    fn test_missing_metadata_entry() {
        let labels = derive_labels("US-999", &Catalog::builtin());
        assert_eq!(
            labels.into_vec(),
            ["user-story", "status:not-started", "priority:p3"]
        );
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels = Labels::new();
        labels.push("a");
        labels.push("b");
        labels.push("a");
        assert_eq!(labels.join(", "), "a, b");
        assert_eq!(labels.into_vec(), ["a", "b"]);
    }

    #[test]
    fn test_builtin_catalog_labels() {
        let catalog = Catalog::builtin();
        let labels = derive_labels("US-026", &catalog);
        assert_eq!(
            labels.into_vec(),
            [
                "user-story",
                "status:not-started",
                "sp-30",
                "sprint-9",
                "testing",
                "priority:p3"
            ]
        );
    }
}

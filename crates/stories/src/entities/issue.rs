//! Issue draft handed to a publisher.

use serde::{Deserialize, Serialize};

/// Everything needed to open one issue for a story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDraft {
    /// Source story identifier
    #[serde(skip)]
    pub story_id: String,

    /// Issue title, e.g. "[USER STORY]: US-004 - Bounded Queue Worker"
    pub title: String,

    /// Markdown body assembled from the story sections
    pub body: String,

    /// Derived labels in emission order
    pub labels: Vec<String>,
}

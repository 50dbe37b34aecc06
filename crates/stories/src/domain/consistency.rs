//! Disagreements between a story's own header and the metadata table.
//!
//! The metadata table stays authoritative for labels. These checks only
//! surface the difference.

use serde::Serialize;
use tracing::debug;

use crate::entities::{Catalog, StoryRecord, UNKNOWN};

use super::labels::CategoryGroup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", rename_all = "camelCase")]
pub enum Discrepancy {
    /// Header sprint differs from the table sprint
    Sprint { declared: u32, catalog: u32 },

    /// Header category routes to a different label bucket than the table
    Category { declared: String, catalog: String },
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sprint { declared, catalog } => write!(
                f,
                "document declares sprint {declared} but catalog says sprint {catalog}"
            ),
            Self::Category { declared, catalog } => write!(
                f,
                "document declares category '{declared}' but catalog says '{catalog}'"
            ),
        }
    }
}

/// Compare the header fields of a parsed story with its catalog entry.
///
/// Missing values on either side are not reported.
pub fn check_consistency(record: &StoryRecord, catalog: &Catalog) -> Vec<Discrepancy> {
    let metadata = catalog.metadata(&record.id);
    let mut found = Vec::new();

    if let (Some(declared), Some(expected)) = (record.declared_sprint(), metadata.sprint) {
        if declared != expected {
            found.push(Discrepancy::Sprint {
                declared,
                catalog: expected,
            });
        }
    }

    if let Some(expected) = metadata.category.as_deref() {
        if record.category != UNKNOWN
            && CategoryGroup::from_category(&record.category)
                != CategoryGroup::from_category(expected)
        {
            found.push(Discrepancy::Category {
                declared: record.category.clone(),
                catalog: expected.to_string(),
            });
        }
    }

    for discrepancy in &found {
        debug!(story_id = %record.id, %discrepancy, "Story header disagrees with catalog");
    }

    found
}

//! Issue body and title assembly.

use crate::entities::{Catalog, IssueDraft, Section, StoryRecord};

use super::labels::derive_labels;

/// Issue title: `[USER STORY]: <id> - <title>`
pub fn issue_title(record: &StoryRecord) -> String {
    format!("[USER STORY]: {} - {}", record.id, record.title)
}

/// Concatenate present sections as `## <Heading>\n\n<content>` blocks,
/// separated by one blank line, in canonical section order.
pub fn assemble_body(record: &StoryRecord) -> String {
    Section::ALL
        .iter()
        .filter(|&&section| record.has_section(section))
        .map(|&section| format!("## {}\n\n{}", section.heading(), record.section(section)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Title, body and labels for one story
pub fn issue_draft(record: &StoryRecord, catalog: &Catalog) -> IssueDraft {
    IssueDraft {
        story_id: record.id.clone(),
        title: issue_title(record),
        body: assemble_body(record),
        labels: derive_labels(&record.id, catalog).into_vec(),
    }
}

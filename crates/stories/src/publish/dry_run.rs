//! Publisher that never creates anything.

use async_trait::async_trait;
use tracing::debug;

use super::{IssuePublisher, PublishedIssue};
use crate::entities::IssueDraft;
use crate::errors::StoriesResult;

/// Logs each draft and reports that nothing was created
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunPublisher;

impl DryRunPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl IssuePublisher for DryRunPublisher {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn is_live(&self) -> bool {
        false
    }

    async fn create_issue(&self, draft: &IssueDraft) -> StoriesResult<Option<PublishedIssue>> {
        debug!(story_id = %draft.story_id, title = %draft.title, "Would create issue");
        Ok(None)
    }
}

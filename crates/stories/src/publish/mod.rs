//! Issue tracker integration.

mod dry_run;
mod github;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::IssueDraft;
use crate::errors::StoriesResult;

pub use dry_run::DryRunPublisher;
pub use github::GitHubPublisher;

/// An issue created on the tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedIssue {
    pub number: u64,
    #[serde(rename = "html_url")]
    pub url: String,
}

/// Destination for story issues
#[async_trait]
pub trait IssuePublisher: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Whether this publisher actually creates issues
    fn is_live(&self) -> bool;

    /// Create one issue.
    ///
    /// Dry-run publishers return `Ok(None)`.
    async fn create_issue(&self, draft: &IssueDraft) -> StoriesResult<Option<PublishedIssue>>;
}

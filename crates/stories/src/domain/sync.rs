//! Batch run over a story directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::entities::{Catalog, StoryRecord};
use crate::errors::StoriesResult;
use crate::publish::IssuePublisher;

use super::body::issue_draft;
use super::consistency::{check_consistency, Discrepancy};
use super::discovery::{discover_stories, load_story};
use super::parser::story_id_from_file_name;

/// What happened to one story's issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum PublishOutcome {
    /// Nothing was sent
    DryRun,
    /// Issue created on the tracker
    Created { number: u64, url: String },
    /// Creation failed; the batch continued
    Failed { reason: String },
}

/// Per-story result of a run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryReport {
    pub id: String,
    pub issue_title: String,
    pub labels: Vec<String>,
    pub complete: bool,
    /// Byte length of the assembled body
    pub body_len: usize,
    pub discrepancies: Vec<Discrepancy>,
    pub outcome: PublishOutcome,
}

/// Story counts over a directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub not_started: usize,
}

/// Result of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub stories: Vec<StoryReport>,
    pub summary: Summary,
}

impl SyncReport {
    /// Number of stories whose issue could not be created
    pub fn failures(&self) -> usize {
        self.stories
            .iter()
            .filter(|s| matches!(s.outcome, PublishOutcome::Failed { .. }))
            .count()
    }
}

/// Sequential discover → parse → label → publish pipeline
pub struct SyncDomain {
    stories_dir: PathBuf,
    file_prefix: String,
    catalog: Arc<Catalog>,
}

impl SyncDomain {
    pub fn new(
        stories_dir: impl AsRef<Path>,
        file_prefix: impl Into<String>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            stories_dir: stories_dir.as_ref().to_path_buf(),
            file_prefix: file_prefix.into(),
            catalog,
        }
    }

    pub fn stories_dir(&self) -> &Path {
        &self.stories_dir
    }

    /// Story files in processing order
    pub async fn discover(&self) -> StoriesResult<Vec<PathBuf>> {
        discover_stories(&self.stories_dir, &self.file_prefix).await
    }

    /// Parse every story in processing order
    pub async fn load_all(&self) -> StoriesResult<Vec<StoryRecord>> {
        let mut records = Vec::new();
        for path in self.discover().await? {
            records.push(load_story(&path).await?);
        }
        Ok(records)
    }

    /// Counts over the discovered stories
    pub async fn summarize(&self) -> StoriesResult<Summary> {
        let files = self.discover().await?;
        Ok(self.summary_for(files.iter().map(story_id_from_file_name)))
    }

    fn summary_for(&self, ids: impl Iterator<Item = String>) -> Summary {
        let mut summary = Summary::default();
        for id in ids {
            summary.total += 1;
            if self.catalog.is_complete(&id) {
                summary.completed += 1;
            } else {
                summary.not_started += 1;
            }
        }
        summary
    }

    /// Process every story, one at a time, in file-name order.
    ///
    /// A failed issue creation is recorded and the run moves on.
    pub async fn run(&self, publisher: &dyn IssuePublisher) -> StoriesResult<SyncReport> {
        let files = self.discover().await?;
        info!(
            dir = %self.stories_dir.display(),
            count = files.len(),
            publisher = publisher.name(),
            "Processing user stories"
        );

        let mut stories = Vec::with_capacity(files.len());
        for path in &files {
            let record = load_story(path).await?;
            stories.push(self.process(&record, publisher).await);
        }

        let summary = self.summary_for(stories.iter().map(|s| s.id.clone()));
        Ok(SyncReport { stories, summary })
    }

    async fn process(&self, record: &StoryRecord, publisher: &dyn IssuePublisher) -> StoryReport {
        let draft = issue_draft(record, &self.catalog);
        let discrepancies = check_consistency(record, &self.catalog);

        let outcome = match publisher.create_issue(&draft).await {
            Ok(Some(issue)) => PublishOutcome::Created {
                number: issue.number,
                url: issue.url,
            },
            Ok(None) => PublishOutcome::DryRun,
            Err(e) => {
                warn!(story_id = %record.id, error = %e, "Failed to create issue");
                PublishOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let body_len = draft.body.len();
        StoryReport {
            id: record.id.clone(),
            issue_title: draft.title,
            labels: draft.labels,
            complete: self.catalog.is_complete(&record.id),
            body_len,
            discrepancies,
            outcome,
        }
    }
}

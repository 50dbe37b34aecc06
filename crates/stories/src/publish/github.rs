//! GitHub issues API publisher.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use super::{IssuePublisher, PublishedIssue};
use crate::entities::{GitHubConfig, IssueDraft};
use crate::errors::{StoriesError, StoriesResult};

const USER_AGENT: &str = concat!("stories/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct CreateIssueRequest<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [String],
}

/// Creates issues through `POST /repos/{owner}/{repo}/issues`
#[derive(Debug, Clone)]
pub struct GitHubPublisher {
    client: reqwest::Client,
    api_url: String,
    repository: String,
    token: String,
}

impl GitHubPublisher {
    /// Create a publisher for `owner/name`
    pub fn new(
        api_url: impl Into<String>,
        repository: impl Into<String>,
        token: impl Into<String>,
    ) -> StoriesResult<Self> {
        let repository = repository.into();
        if repository.split('/').filter(|part| !part.is_empty()).count() != 2 {
            return Err(StoriesError::InvalidArgument {
                reason: format!("repository must be 'owner/name', got '{repository}'"),
            });
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StoriesError::ConfigError {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            repository,
            token: token.into(),
        })
    }

    /// Build a publisher from configuration.
    ///
    /// Fails with `IntegrationDisabled` unless `github.enabled` is set, and
    /// with `MissingToken` when the token variable is unset or empty.
    pub fn from_config(config: &GitHubConfig, repository: &str) -> StoriesResult<Self> {
        if !config.enabled {
            return Err(StoriesError::IntegrationDisabled);
        }

        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| StoriesError::MissingToken {
                var: config.token_env.clone(),
            })?;

        Self::new(&config.api_url, repository, token)
    }

    fn issues_url(&self) -> String {
        format!("{}/repos/{}/issues", self.api_url, self.repository)
    }
}

#[async_trait]
impl IssuePublisher for GitHubPublisher {
    fn name(&self) -> &'static str {
        "github"
    }

    fn is_live(&self) -> bool {
        true
    }

    async fn create_issue(&self, draft: &IssueDraft) -> StoriesResult<Option<PublishedIssue>> {
        let failed = |reason: String| StoriesError::PublishFailed {
            story_id: draft.story_id.clone(),
            reason,
        };

        debug!(
            repo = %self.repository,
            story_id = %draft.story_id,
            labels = draft.labels.len(),
            "Creating GitHub issue"
        );

        let response = self
            .client
            .post(self.issues_url())
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&CreateIssueRequest {
                title: &draft.title,
                body: &draft.body,
                labels: &draft.labels,
            })
            .send()
            .await
            .map_err(|e| failed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(failed(format!("GitHub API returned {status}: {error_body}")));
        }

        let issue: PublishedIssue = response
            .json()
            .await
            .map_err(|e| failed(format!("failed to parse response: {e}")))?;

        info!(
            story_id = %draft.story_id,
            issue_number = issue.number,
            issue_url = %issue.url,
            "Created GitHub issue"
        );
        Ok(Some(issue))
    }
}

//! Configuration entities.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Catalog;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesConfig {
    /// Directory holding the story files, relative to the project root
    #[serde(default = "default_stories_dir")]
    pub stories_dir: PathBuf,

    /// File name prefix of story files (`<prefix>-*.md`)
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Target repository as `owner/name`
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Issue tracker settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Replaces the built-in catalog when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,
}

impl Default for StoriesConfig {
    fn default() -> Self {
        Self {
            stories_dir: default_stories_dir(),
            file_prefix: default_file_prefix(),
            repository: default_repository(),
            github: GitHubConfig::default(),
            catalog: None,
        }
    }
}

impl StoriesConfig {
    /// Story directory resolved against the project root
    pub fn resolve_stories_dir(&self, project_path: impl AsRef<Path>) -> PathBuf {
        if self.stories_dir.is_absolute() {
            self.stories_dir.clone()
        } else {
            project_path.as_ref().join(&self.stories_dir)
        }
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> Catalog {
        self.catalog.clone().unwrap_or_else(Catalog::builtin)
    }
}

/// GitHub issues API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubConfig {
    /// Live issue creation is off unless explicitly enabled
    #[serde(default)]
    pub enabled: bool,

    /// Environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// API base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            token_env: default_token_env(),
            api_url: default_api_url(),
        }
    }
}

fn default_stories_dir() -> PathBuf {
    PathBuf::from("docs/user-stories")
}

fn default_file_prefix() -> String {
    "US".to_string()
}

fn default_repository() -> String {
    "RoySalisbury/HVO.Enterprise".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

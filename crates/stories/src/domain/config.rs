//! Configuration domain facade.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::entities::StoriesConfig;
use crate::errors::{StoriesError, StoriesResult};

/// Loads `.stories/config.json` from a project root
pub struct ConfigDomain {
    config_path: PathBuf,
}

impl ConfigDomain {
    /// Create a new config domain
    pub fn new(project_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_path.as_ref().join(".stories/config.json"),
        }
    }

    /// Path of the configuration file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration; a missing file yields the defaults
    pub async fn load(&self) -> StoriesResult<StoriesConfig> {
        match fs::read_to_string(&self.config_path).await {
            Ok(content) => {
                let config: StoriesConfig =
                    serde_json::from_str(&content).map_err(|e| StoriesError::ConfigError {
                        reason: format!("{}: {e}", self.config_path.display()),
                    })?;
                debug!(path = %self.config_path.display(), "Loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoriesConfig::default()),
            Err(e) => Err(StoriesError::FileReadError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp_dir.path());

        let config = domain.load().await.unwrap();
        assert_eq!(config.stories_dir, PathBuf::from("docs/user-stories"));
        assert_eq!(config.file_prefix, "US");
        assert_eq!(config.repository, "RoySalisbury/HVO.Enterprise");
        assert!(!config.github.enabled);
        assert_eq!(config.github.token_env, "GITHUB_TOKEN");
        assert_eq!(config.catalog().metadata.len(), 30);
    }

    #[tokio::test]
    async fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(".stories")).unwrap();
        std::fs::write(
            temp_dir.path().join(".stories/config.json"),
            r#"{
                "storiesDir": "stories",
                "github": {"enabled": true},
                "catalog": {"completed": [], "metadata": {"US-001": {"sprint": 12}}}
            }"#,
        )
        .unwrap();

        let config = ConfigDomain::new(temp_dir.path()).load().await.unwrap();
        assert_eq!(
            config.resolve_stories_dir(temp_dir.path()),
            temp_dir.path().join("stories")
        );
        assert!(config.github.enabled);
        assert_eq!(config.github.api_url, "https://api.github.com");
        let catalog = config.catalog();
        assert_eq!(catalog.metadata("US-001").sprint, Some(12));
        assert!(!catalog.is_complete("US-001"));
    }

    #[tokio::test]
    async fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(".stories")).unwrap();
        std::fs::write(temp_dir.path().join(".stories/config.json"), "{ nope").unwrap();

        let err = ConfigDomain::new(temp_dir.path()).load().await.unwrap_err();
        assert!(matches!(err, StoriesError::ConfigError { .. }));
    }
}

//! Error types for the stories crate.

use thiserror::Error;

/// Errors raised while loading, labelling and publishing stories
#[derive(Error, Debug, Clone)]
pub enum StoriesError {
    // Discovery errors
    #[error("User stories directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Story '{id}' not found")]
    StoryNotFound { id: String },

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("GitHub API integration not yet enabled")]
    IntegrationDisabled,

    #[error("{var} environment variable not set")]
    MissingToken { var: String },

    // Publishing errors
    #[error("Failed to create issue for '{story_id}': {reason}")]
    PublishFailed { story_id: String, reason: String },

    // General errors
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl From<std::io::Error> for StoriesError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoriesError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for stories operations
pub type StoriesResult<T> = Result<T, StoriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_not_found_names_path() {
        let err = StoriesError::DirectoryNotFound {
            path: "/repo/docs/user-stories".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "User stories directory not found: /repo/docs/user-stories"
        );
    }

    #[test]
    fn test_missing_token_display() {
        let err = StoriesError::MissingToken {
            var: "GITHUB_TOKEN".to_string(),
        };
        assert_eq!(err.to_string(), "GITHUB_TOKEN environment variable not set");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StoriesError = io_err.into();
        assert!(matches!(err, StoriesError::StorageError { .. }));
    }
}

//! Core data structures for story processing.

mod catalog;
mod config;
mod issue;
mod story;

pub use catalog::{Catalog, StoryMetadata};
pub use config::{GitHubConfig, StoriesConfig};
pub use issue::IssueDraft;
pub use story::{Section, StoryRecord, DEFAULT_STATUS, UNKNOWN, UNKNOWN_TITLE};

#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Stories
//!
//! Turns user-story markdown files into GitHub issues.
//!
//! This crate provides:
//! - A tolerant parser for story documents (title, header fields, sections)
//! - Label derivation from a static story catalog
//! - Issue body assembly in a fixed section order
//! - A dry-run batch runner and an optional GitHub publisher
//!
//! ## Example
//!
//! ```rust,ignore
//! use stories::domain::{derive_labels, parse_story};
//! use stories::Catalog;
//!
//! let record = parse_story("US-004", &std::fs::read_to_string("US-004-queue.md")?);
//! let labels = derive_labels(&record.id, &Catalog::builtin());
//! println!("{}", labels.join(", "));
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Domain logic
pub mod domain;

// Issue tracker integration
pub mod publish;

// Terminal UI helpers
pub mod ui;

pub use entities::{Catalog, IssueDraft, Section, StoriesConfig, StoryMetadata, StoryRecord};
pub use errors::{StoriesError, StoriesResult};
pub use publish::{DryRunPublisher, GitHubPublisher, IssuePublisher, PublishedIssue};

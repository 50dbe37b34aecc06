//! Domain logic: parsing, labelling, body assembly and the batch run.

pub mod body;
pub mod config;
pub mod consistency;
pub mod discovery;
pub mod labels;
pub mod parser;
pub mod sync;

pub use body::{assemble_body, issue_draft, issue_title};
pub use config::ConfigDomain;
pub use consistency::{check_consistency, Discrepancy};
pub use discovery::{discover_stories, find_story, load_story};
pub use labels::{derive_labels, labels_for, CategoryGroup, Labels, Priority};
pub use parser::{parse_story, story_id_from_file_name};
pub use sync::{PublishOutcome, StoryReport, Summary, SyncDomain, SyncReport};

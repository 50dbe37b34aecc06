//! Story file discovery and loading.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::entities::StoryRecord;
use crate::errors::{StoriesError, StoriesResult};

use super::parser::{parse_story, story_id_from_file_name};

/// Files named `<prefix>-*.md` directly inside `dir`, sorted by file name.
pub async fn discover_stories(dir: impl AsRef<Path>, prefix: &str) -> StoriesResult<Vec<PathBuf>> {
    let dir = dir.as_ref();

    match fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => {}
        _ => {
            return Err(StoriesError::DirectoryNotFound {
                path: dir.display().to_string(),
            })
        }
    }

    let file_prefix = format!("{prefix}-");
    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir).await.map_err(|e| StoriesError::FileReadError {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(&file_prefix)
            && path.extension().is_some_and(|ext| ext == "md")
            && entry.file_type().await?.is_file()
        {
            files.push(path);
        }
    }

    files.sort();
    debug!(dir = %dir.display(), count = files.len(), "Discovered story files");
    Ok(files)
}

/// Read and parse one story file
pub async fn load_story(path: impl AsRef<Path>) -> StoriesResult<StoryRecord> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| StoriesError::FileReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(parse_story(&story_id_from_file_name(path), &content))
}

/// Find the file of a single story by identifier
pub async fn find_story(
    dir: impl AsRef<Path>,
    prefix: &str,
    story_id: &str,
) -> StoriesResult<PathBuf> {
    discover_stories(dir, prefix)
        .await?
        .into_iter()
        .find(|path| story_id_from_file_name(path).eq_ignore_ascii_case(story_id))
        .ok_or_else(|| StoriesError::StoryNotFound {
            id: story_id.to_string(),
        })
}

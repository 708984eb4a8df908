//! Source file discovery for `graphql-usage lint`.

use anyhow::{Context, Result};
use graphql_usage_config::ProjectConfig;
use graphql_usage_linter::SourceLanguage;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into
const SKIPPED_DIRS: &[&str] = &["node_modules"];

/// Collect the JavaScript/TypeScript files to lint under `paths`.
///
/// Directories are walked recursively, skipping `node_modules` and hidden
/// directories, and filtered through the config's include/exclude patterns
/// (relative to `root`). Files named explicitly are always linted.
pub fn discover_sources(
    paths: &[PathBuf],
    config: &ProjectConfig,
    root: &Path,
) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for path in paths {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("cannot access {}", path.display()))?;

        if metadata.is_file() {
            sources.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry))
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file = entry.path();
            if SourceLanguage::from_path(file).is_none() {
                continue;
            }
            if !config.matches(file, root) {
                tracing::trace!(path = %file.display(), "Excluded by config");
                continue;
            }
            sources.push(file.to_path_buf());
        }
    }

    sources.sort();
    sources.dedup();
    tracing::debug!(count = sources.len(), "Discovered source files");
    Ok(sources)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') || SKIPPED_DIRS.contains(&name))
}

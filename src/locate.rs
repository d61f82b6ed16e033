use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::suffix::original_file_path;

pub trait DirectoryListing {
    fn entries(&self, dir: &Path) -> Result<Vec<String>>;
}

pub struct FsDirectoryListing;

impl DirectoryListing for FsDirectoryListing {
    fn entries(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Failed to read entry in {}", dir.display()))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }
}

pub fn most_recent_backup_file(
    original: &Path,
    listing: &impl DirectoryListing,
) -> Result<Option<PathBuf>> {
    let file_name = original
        .file_name()
        .ok_or_else(|| anyhow!("Path {} has no filename component", original.display()))?
        .to_string_lossy()
        .into_owned();

    let dir = original.parent().filter(|p| !p.as_os_str().is_empty());

    let entries = listing.entries(dir.unwrap_or_else(|| Path::new(".")))?;

    // Fixed-width timestamp tokens make plain lexicographic order of the
    // full name agree with "longest chain, then newest timestamp".
    let winner = entries
        .into_iter()
        .filter(|name| *name != file_name && original_file_path(name) == file_name)
        .max();

    Ok(winner.map(|name| match dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }))
}

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDateTime};

pub const BACKUP_MARKER: &str = ".bak.";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

// YYYYMMDDTHHMMSS
const TIMESTAMP_LEN: usize = 15;

fn is_timestamp_token(token: &[u8]) -> bool {
    token.len() == TIMESTAMP_LEN
        && token[..8].iter().all(u8::is_ascii_digit)
        && token[8] == b'T'
        && token[9..].iter().all(u8::is_ascii_digit)
}

// A valid tail is one or more marker+timestamp elements reaching the exact
// end of the name. Anything left over means the name is not a backup.
fn is_suffix_chain(tail: &str) -> bool {
    let mut rest = tail.as_bytes();

    if rest.is_empty() {
        return false;
    }

    while !rest.is_empty() {
        if !rest.starts_with(BACKUP_MARKER.as_bytes()) {
            return false;
        }
        rest = &rest[BACKUP_MARKER.len()..];

        if rest.len() < TIMESTAMP_LEN || !is_timestamp_token(&rest[..TIMESTAMP_LEN]) {
            return false;
        }
        rest = &rest[TIMESTAMP_LEN..];
    }

    true
}

pub fn original_file_path(path: &str) -> &str {
    // Backups of backups append further suffixes, so the original is the
    // prefix before the leftmost marker that starts a valid chain.
    for (idx, _) in path.match_indices(BACKUP_MARKER) {
        if is_suffix_chain(&path[idx..]) {
            return &path[..idx];
        }
    }

    path
}

pub fn is_backup_name(name: &str) -> bool {
    original_file_path(name) != name
}

pub fn backup_file_name(path: &Path, at: NaiveDateTime) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("Path {} has no filename component", path.display()))?
        .to_string_lossy();

    let backup_name = format!(
        "{}{}{}",
        name,
        BACKUP_MARKER,
        at.format(TIMESTAMP_FORMAT)
    );

    Ok(path.with_file_name(backup_name))
}

pub fn backup_file_name_now(path: &Path) -> Result<PathBuf> {
    backup_file_name(path, Local::now().naive_local())
}

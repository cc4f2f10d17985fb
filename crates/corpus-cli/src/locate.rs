//! Corpus locator: expand the PATH argument into the entries to decode.
//!
//! ```text
//! ┌──────────────────┬──────────────────────────────────────────────┐
//! │ PATH is          │ Entries                                      │
//! ├──────────────────┼──────────────────────────────────────────────┤
//! │ a regular file   │ exactly that file                            │
//! │ a directory      │ every regular file below it, depth-first     │
//! │ anything else    │ none (missing paths included)                │
//! └──────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! Traversal order is whatever `read_dir` yields and is not sorted.
//! Nothing is opened here; only directory listings are read.

use std::fs;
use std::path::{Path, PathBuf};

/// List the corpus entries under `path`.
pub fn locate(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut entries = Vec::new();
    if path.is_dir() {
        collect_files(path, &mut entries);
    } else {
        tracing::debug!(path = %path.display(), "path is neither a file nor a directory");
    }
    entries
}

fn collect_files(dir: &Path, entries: &mut Vec<PathBuf>) {
    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "cannot list directory, skipping");
            return;
        }
    };

    for entry in listing.filter_map(Result::ok) {
        let path = entry.path();
        // `file_type` does not follow symlinks, so a link to a directory is
        // never descended into and cannot form a cycle.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            collect_files(&path, entries);
        } else if path.is_file() {
            entries.push(path);
        }
    }
}

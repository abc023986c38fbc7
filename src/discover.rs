//! Source file discovery.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::error::RunError;

/// Extensions picked up when walking directories.
pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx", "ts", "jsx", "js"];

/// Expand `paths` into the list of files to process.
///
/// Files named explicitly are always included. Directories are walked
/// recursively for files with one of `extensions`, skipping `node_modules`
/// and hidden directories. Entries that cannot be read (dangling symlinks,
/// symlink loops) are logged and skipped. The result is sorted and free of duplicates.
pub fn discover_files(paths: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>, RunError> {
    let mut files = Vec::new();

    for root in paths {
        let metadata = std::fs::metadata(root).map_err(|source| RunError::Io {
            path: root.clone(),
            source,
        })?;
        if metadata.is_file() {
            files.push(root.clone());
            continue;
        }

        let walker = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));
        for entry in walker {
            // Symlink loops and dangling links only cost the entry itself.
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(root = %root.display(), %error, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name == "node_modules" || name.starts_with('.')
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

//! Source file discovery.

use std::path::{Path, PathBuf};

use cs_rules::{SOURCE_EXTENSIONS, SOURCE_ROOTS};
use walkdir::{DirEntry, WalkDir};

/// Find every source file under the project roots of `repo_root`.
///
/// Order is root by root, then extension by extension, then sorted path
/// order, so runs are deterministic. Missing roots are skipped. Hidden files
/// and directories are ignored.
pub fn discover_sources(repo_root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for root in SOURCE_ROOTS {
        let dir = repo_root.join(root);
        if !dir.is_dir() {
            tracing::debug!("source root {} not found, skipping", dir.display());
            continue;
        }

        let mut found = files_under(&dir);
        found.sort();

        for ext in SOURCE_EXTENSIONS {
            files.extend(
                found
                    .iter()
                    .filter(|p| p.extension().is_some_and(|e| e == *ext))
                    .cloned(),
            );
        }
    }

    files
}

fn files_under(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("cannot read directory entry: {e}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

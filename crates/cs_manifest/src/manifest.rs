//! Commenting and uncommenting `CMakeLists.txt` file-list entries.

use std::fs;
use std::path::{Path, PathBuf};

use cs_rules::MANIFEST_COMMENT;

use crate::error::{RelocateError, Result};

/// Direction of a manifest edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEdit {
    /// Prefix every matching line with `#`.
    Disable,
    /// Remove the first `#` from every matching line.
    Enable,
}

impl EntryEdit {
    fn apply(self, line: &str) -> String {
        match self {
            EntryEdit::Disable => format!("{MANIFEST_COMMENT}{line}"),
            EntryEdit::Enable => line.replacen(MANIFEST_COMMENT, "", 1),
        }
    }
}

/// Edit every line of `text` that contains `fragment`. Returns the new text
/// and the number of lines that changed.
pub fn toggle_entries(text: &str, fragment: &str, edit: EntryEdit) -> (String, usize) {
    let mut changed = 0;
    let output = text
        .split_inclusive('\n')
        .map(|line| {
            if !line.contains(fragment) {
                return line.to_string();
            }
            let edited = edit.apply(line);
            if edited != line {
                changed += 1;
            }
            edited
        })
        .collect();
    (output, changed)
}

/// Read an ASCII manifest; a non-ASCII one is an error.
pub(crate) fn read_manifest(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(RelocateError::io(path))?;
    if !bytes.is_ascii() {
        return Err(RelocateError::NonAsciiManifest(path.to_path_buf()));
    }
    String::from_utf8(bytes).map_err(|_| RelocateError::NonAsciiManifest(path.to_path_buf()))
}

/// A manifest edit that has been read and computed but not yet written.
#[derive(Debug)]
pub(crate) struct StagedEdit {
    path: PathBuf,
    output: String,
    changed: usize,
}

impl StagedEdit {
    /// Read the manifest at `path` and compute `edit` without touching the disk.
    pub(crate) fn stage(path: &Path, fragment: &str, edit: EntryEdit) -> Result<Self> {
        let text = read_manifest(path)?;
        let (output, changed) = toggle_entries(&text, fragment, edit);
        tracing::debug!(
            "{:?} '{}' in {}: {} line(s)",
            edit,
            fragment,
            path.display(),
            changed
        );
        Ok(Self {
            path: path.to_path_buf(),
            output,
            changed,
        })
    }

    /// Write the edited text back if anything changed.
    pub(crate) fn commit(self) -> Result<usize> {
        if self.changed > 0 {
            fs::write(&self.path, self.output).map_err(RelocateError::io(&self.path))?;
        }
        Ok(self.changed)
    }
}

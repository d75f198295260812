//! Per-file rewrite loop.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cs_rewrite::rewrite_source;
use cs_rules::Transform;

use crate::codec::{decode_legacy, encode_legacy};
use crate::walk::discover_sources;

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was written back with new content.
    Rewritten {
        lines_changed: usize,
        lines_dropped: usize,
    },
    /// The transform produced identical text; the file was not touched.
    Unchanged,
    /// The file is not valid Windows-1252 and was left alone.
    Skipped,
}

/// Totals for one run over a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub rewritten: usize,
    pub unchanged: usize,
    pub skipped: Vec<PathBuf>,
    pub lines_changed: usize,
    pub lines_dropped: usize,
}

impl RunReport {
    pub fn files_seen(&self) -> usize {
        self.rewritten + self.unchanged + self.skipped.len()
    }

    fn record(&mut self, path: &Path, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Rewritten {
                lines_changed,
                lines_dropped,
            } => {
                self.rewritten += 1;
                self.lines_changed += lines_changed;
                self.lines_dropped += lines_dropped;
            }
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Skipped => self.skipped.push(path.to_path_buf()),
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s): {} rewritten, {} unchanged, {} skipped ({} line(s) changed, {} dropped)",
            self.files_seen(),
            self.rewritten,
            self.unchanged,
            self.skipped.len(),
            self.lines_changed,
            self.lines_dropped
        )
    }
}

/// Apply `transform` to one file in place.
///
/// Read errors and write errors are returned; a file that does not decode
/// as Windows-1252 is reported as [`FileOutcome::Skipped`] and left as is.
pub fn rewrite_file(path: &Path, transform: Transform) -> Result<FileOutcome> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let Some(source) = decode_legacy(&bytes) else {
        tracing::debug!("skipping {}: not Windows-1252 text", path.display());
        return Ok(FileOutcome::Skipped);
    };

    let result = rewrite_source(&source, transform);

    if result.open_depth > 0 {
        tracing::warn!(
            "{}: RTS_INTERNAL region still open at end of file (depth {}), trailing lines dropped",
            path.display(),
            result.open_depth
        );
    }

    if result.output == source {
        return Ok(FileOutcome::Unchanged);
    }

    let encoded = encode_legacy(&result.output)
        .with_context(|| format!("failed to encode {}", path.display()))?;
    fs::write(path, encoded).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::debug!(
        "rewrote {} ({} changed, {} dropped)",
        path.display(),
        result.lines_changed,
        result.lines_dropped
    );

    Ok(FileOutcome::Rewritten {
        lines_changed: result.lines_changed,
        lines_dropped: result.lines_dropped,
    })
}

/// Apply `transform` to every source file under `repo_root`.
pub fn rewrite_tree(repo_root: &Path, transform: Transform) -> Result<RunReport> {
    let files = discover_sources(repo_root);
    tracing::info!(
        "{transform}: {} source file(s) under {}",
        files.len(),
        repo_root.display()
    );

    let mut report = RunReport::default();
    for path in &files {
        let outcome = rewrite_file(path, transform)?;
        report.record(path, &outcome);
    }

    Ok(report)
}

use cs_rules::Transform;

use crate::passes::{
    fold_flags, rewrite_delete_instance, strip_log_newline, trim_trailing_whitespace,
    ConditionalFilter, LineAction, LineEnding,
};

/// Result of running one transform over a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub output: String,
    /// Lines kept but altered by the transform.
    pub lines_changed: usize,
    /// Lines removed by the conditional filter.
    pub lines_dropped: usize,
    /// Conditional depth left open at end of file (`0` when balanced).
    pub open_depth: usize,
}

impl RewriteResult {
    pub fn is_unchanged(&self) -> bool {
        self.lines_changed == 0 && self.lines_dropped == 0
    }
}

/// Run `transform` over every line of `source`.
///
/// Lines keep their own terminators except under `TrimWhitespace`, which
/// re-terminates every line with the file's detected line ending. Filter
/// state for `RemoveRtsInternal` lives only for this call.
pub fn rewrite_source(source: &str, transform: Transform) -> RewriteResult {
    let ending = LineEnding::detect(source);
    let mut filter = ConditionalFilter::new();
    let mut output = String::with_capacity(source.len());
    let mut lines_changed = 0;
    let mut lines_dropped = 0;

    for line in source.split_inclusive('\n') {
        let rewritten = match transform {
            Transform::LogNewlines => strip_log_newline(line),
            Transform::DeleteInstance => rewrite_delete_instance(line),
            Transform::RemoveRtsInternal => match filter.step(line) {
                LineAction::Drop => {
                    lines_dropped += 1;
                    continue;
                }
                LineAction::Keep => fold_flags(line),
            },
            Transform::TrimWhitespace => trim_trailing_whitespace(line, ending),
        };

        if rewritten != line {
            lines_changed += 1;
        }
        output.push_str(&rewritten);
    }

    RewriteResult {
        output,
        lines_changed,
        lines_dropped,
        open_depth: filter.depth(),
    }
}

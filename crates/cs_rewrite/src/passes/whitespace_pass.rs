//! Trailing whitespace removal.

use super::util::LineEnding;

/// Strip trailing whitespace (a stray `\r` included) and terminate with `ending`.
pub fn trim_trailing_whitespace(line: &str, ending: LineEnding) -> String {
    let body = line.trim_end();
    let mut out = String::with_capacity(body.len() + 2);
    out.push_str(body);
    out.push_str(ending.as_str());
    out
}

/// Normalize a whole file: every line trimmed and terminated with the file's
/// own line ending, so the last line always ends with exactly one terminator.
pub fn normalize_trailing_whitespace(source: &str) -> String {
    let ending = LineEnding::detect(source);
    source
        .split_inclusive('\n')
        .map(|line| trim_trailing_whitespace(line, ending))
        .collect()
}

//! Folding of conditions that mention the retired `RTS_INTERNAL` flag.

use cs_rules::FLAG_FOLDS;

use super::util::replace_first;

/// Replace the first table phrase found in `line` (table order) with its fold.
pub fn fold_flags(line: &str) -> String {
    FLAG_FOLDS
        .iter()
        .find_map(|(search, replacement)| replace_first(line, search, replacement))
        .unwrap_or_else(|| line.to_string())
}

//! Newline escape stripping for logging macros.
//!
//! `DEBUG_LOG(("loaded %d\n", n));` → `DEBUG_LOG(("loaded %d", n));`
//!
//! Only the first macro name from the table that appears in the line is
//! used as the anchor, and only one escape is collapsed per line.

use cs_lexer::{char_offset_to_byte, find_from};
use cs_rules::{LOG_MACROS, NEWLINE_ARTIFACTS};

/// Collapse the first `\r\n"` (else `\n"`) after a logging macro name into `"`.
pub fn strip_log_newline(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();

    let Some((macro_start, macro_len)) = LOG_MACROS.iter().find_map(|name| {
        let name: Vec<char> = name.chars().collect();
        find_from(&chars, &name, 0).map(|start| (start, name.len()))
    }) else {
        return line.to_string();
    };
    let search_from = macro_start + macro_len;

    // An artifact flush against the last char of the line is never taken.
    let window = &chars[..chars.len().saturating_sub(1)];

    for artifact in NEWLINE_ARTIFACTS {
        let artifact: Vec<char> = artifact.chars().collect();
        if let Some(start) = find_from(window, &artifact, search_from) {
            let bs = char_offset_to_byte(&chars, start);
            let be = char_offset_to_byte(&chars, start + artifact.len());
            return format!("{}\"{}", &line[..bs], &line[be..]);
        }
    }

    line.to_string()
}

//! Character-level scanning for cppsweep.
//!
//! There is no C++ tokenizer here. Lines are treated as `&[char]` and
//! scanned with three character classes:
//!
//! - whitespace
//! - brace (`{`, `}`)
//! - everything else
//!
//! Offsets returned by this crate are char offsets into the slice; use
//! [`char_offset_to_byte`] to slice the original `&str`.

/// Coarse class of a single character for the backward owner scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Brace,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c == '{' || c == '}' {
            CharClass::Brace
        } else {
            CharClass::Other
        }
    }
}

/// A half-open range of char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Collect the chars covered by this span.
    pub fn text(&self, chars: &[char]) -> String {
        chars[self.start..self.end].iter().collect()
    }
}

/// Find `needle` in `chars`, starting the search at char offset `from`.
pub fn find_from(chars: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= chars.len()).then_some(from);
    }
    if from >= chars.len() || chars.len() - from < needle.len() {
        return None;
    }
    chars[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// Whether the chars immediately before `pos` spell `suffix`.
pub fn preceded_by(chars: &[char], pos: usize, suffix: &str) -> bool {
    let suffix: Vec<char> = suffix.chars().collect();
    pos >= suffix.len() && chars[pos - suffix.len()..pos] == suffix[..]
}

/// Chars skipped between an owner expression and its call: `->` and blanks.
fn is_access_gap(c: char) -> bool {
    c == '-' || c == '>' || c.is_whitespace()
}

/// Recover the owner expression of a call starting at char offset `call_start`.
///
/// Walks backward over member-access arrows and whitespace to find where the
/// owner ends, then keeps walking over anything that is neither whitespace
/// nor a brace to find where it begins. The span is empty when the call has
/// no receiver on this line (start of line, or a brace/blank directly before
/// the gap).
///
/// ```text
/// foo->deleteInstance();    owner = "foo"
///   m_list[i] -> deleteInstance();  owner = "m_list[i]"
/// { deleteInstance();       owner = ""
/// ```
pub fn owner_span(chars: &[char], call_start: usize) -> Span {
    let mut i = call_start.min(chars.len());

    while i > 0 && is_access_gap(chars[i - 1]) {
        i -= 1;
    }
    let end = i;

    while i > 0 && CharClass::of(chars[i - 1]) == CharClass::Other {
        i -= 1;
    }

    Span::new(i, end)
}

/// Convert a character index to a byte offset in UTF-8.
pub fn char_offset_to_byte(chars: &[char], char_idx: usize) -> usize {
    chars[..char_idx].iter().map(|c| c.len_utf8()).sum()
}

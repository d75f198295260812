//! Shared helpers for the line passes.

/// Line terminator style of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Style of the first terminated line. Files with no terminator at all are `Lf`.
    pub fn detect(source: &str) -> Self {
        match source.find('\n') {
            Some(pos) if source[..pos].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Split a line into its content and its terminator (`"\r\n"`, `"\n"` or `""`).
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, &line[body.len()..])
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, &line[body.len()..])
    } else {
        (line, "")
    }
}

/// Replace the first occurrence of `from` with `to`, or `None` if absent.
pub(super) fn replace_first(line: &str, from: &str, to: &str) -> Option<String> {
    let start = line.find(from)?;
    let mut out = String::with_capacity(line.len() + to.len());
    out.push_str(&line[..start]);
    out.push_str(to);
    out.push_str(&line[start + from.len()..]);
    Some(out)
}

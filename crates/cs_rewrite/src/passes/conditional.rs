//! Removal of `#ifdef RTS_INTERNAL` regions.
//!
//! A region opens on a line that is exactly one of the retired-flag
//! openers and closes on the `#endif` that brings the nesting depth back
//! to zero. Everything in between is dropped, boundary directives
//! included. Nested `#if`/`#ifdef`/`#ifndef` inside a region raise the
//! depth so their `#endif` does not end it early.

use cs_rules::RETIRED_BLOCK_OPENERS;

use super::util::split_terminator;

/// What to do with the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    Keep,
    Drop,
}

/// Nesting tracker for one file. Create a fresh one per file.
#[derive(Debug, Default)]
pub struct ConditionalFilter {
    depth: usize,
}

impl ConditionalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth; `0` means lines are being emitted.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Feed one line (terminator optional) and decide whether it survives.
    pub fn step(&mut self, line: &str) -> LineAction {
        if self.depth > 0 {
            if line.contains("#if") {
                self.depth += 1;
            } else if line.contains("#endif") {
                self.depth -= 1;
            }
            return LineAction::Drop;
        }

        let (body, _) = split_terminator(line);
        if RETIRED_BLOCK_OPENERS.contains(&body) {
            self.depth = 1;
            return LineAction::Drop;
        }

        LineAction::Keep
    }
}

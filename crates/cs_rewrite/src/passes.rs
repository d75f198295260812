//! Per-line rewriting passes.
//!
//! Each pass is a pure function over one line (terminator included) except
//! the conditional filter, which carries a nesting depth across the lines of
//! a single file. Lines a pass does not touch come back unchanged.

mod conditional;
mod delete_instance_pass;
mod flag_fold_pass;
mod log_newline_pass;
mod util;
mod whitespace_pass;

pub use conditional::{ConditionalFilter, LineAction};
pub use delete_instance_pass::rewrite_delete_instance;
pub use flag_fold_pass::fold_flags;
pub use log_newline_pass::strip_log_newline;
pub use util::{split_terminator, LineEnding};
pub use whitespace_pass::{normalize_trailing_whitespace, trim_trailing_whitespace};

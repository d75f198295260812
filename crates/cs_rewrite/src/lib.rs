//! Line-oriented rewriting engine for C++ sources.
//!
//! Each pass looks at one line at a time and rewrites it by substring
//! search and character-class scanning, never by parsing C++:
//!
//! - Newline escapes at the end of logging macro strings (`\n"` → `"`)
//! - Member-style `deleteInstance()` calls → `MemoryPoolObject::deleteInstance(obj)`
//! - `RTS_INTERNAL` blocks dropped, mixed `RTS_DEBUG`/`RTS_INTERNAL` conditions folded
//! - Trailing whitespace stripped
//!
//! [`rewrite_source`] runs one transform over a whole file and threads the
//! per-file conditional-block state through the line loop.

pub mod passes;
pub mod rewrite;

pub use passes::{
    fold_flags, normalize_trailing_whitespace, rewrite_delete_instance, strip_log_newline,
    trim_trailing_whitespace, ConditionalFilter, LineAction, LineEnding,
};
pub use rewrite::{rewrite_source, RewriteResult};

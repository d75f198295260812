//! File relocation between the game variants and `Core`.
//!
//! A relocation edits up to three `CMakeLists.txt` files (entries are
//! commented out with `#` in the variants and uncommented in `Core`), then
//! deletes or moves the source files. All preconditions are checked before
//! anything on disk changes.

pub mod error;
pub mod manifest;
pub mod plan;
pub mod relocate;

pub use error::RelocateError;
pub use manifest::{toggle_entries, EntryEdit};
pub use plan::{Operation, Plan, Relocation};
pub use relocate::{unify_file, unify_move_file, EntryPath, Layout};

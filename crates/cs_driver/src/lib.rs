//! Plumbing around the rewriting engine.
//!
//! 1. Walk `Core/`, `Generals/` and `GeneralsMD/` for `.h`, `.cpp`, `.inl`
//! 2. Decode each file as Windows-1252 (undecodable files are skipped)
//! 3. Run the selected transform and write the file back in place

pub mod codec;
pub mod driver;
pub mod walk;

pub use driver::{rewrite_file, rewrite_tree, FileOutcome, RunReport};
pub use walk::discover_sources;

//! Shared vocabulary for cppsweep.
//!
//! Holds the ordered lookup tables the line rewriters consult and the small
//! enums the driver, relocator and CLI pass between each other:
//! - Logging macro names (`DEBUG_LOG`, `WWDEBUG_SAY`, ...)
//! - Newline escape artifacts (`\r\n"`, `\n"`)
//! - `RTS_DEBUG`/`RTS_INTERNAL` condition folds
//! - Project variants (`Generals`, `GeneralsMD`, `Core`)
//!
//! Every table is first-match-wins, so entry order is part of the contract.

use serde::{Deserialize, Serialize};

/// Logging and diagnostic macros whose string literals may carry a stray
/// newline escape before the closing quote.
pub const LOG_MACROS: &[&str] = &[
    "DEBUG_LOG",
    "DEBUG_LOG_LEVEL",
    "DEBUG_CRASH",
    "DEBUG_ASSERTLOG",
    "DEBUG_ASSERTCRASH",
    "RELEASE_CRASH",
    "RELEASE_CRASHLOCALIZED",
    "WWDEBUG_SAY",
    "WWDEBUG_WARNING",
    "WWRELEASE_SAY",
    "WWRELEASE_WARNING",
    "WWRELEASE_ERROR",
    "WWASSERT_PRINT",
    "WWDEBUG_ERROR",
    "SNAPSHOT_SAY",
    "SHATTER_DEBUG_SAY",
    "DBGMSG",
    "DOUBLE_DEBUG",
    "PERF_LOG",
    "CRCGEN_LOG",
    "STATECHANGED_LOG",
    "PING_LOG",
    "BONEPOS_LOG",
];

/// Escape text (not control characters) that ends a log message string.
/// `\r\n"` is tried before `\n"` over the whole remainder of the line.
pub const NEWLINE_ARTIFACTS: &[&str] = &[r#"\r\n""#, r#"\n""#];

/// Condition spellings that mention the retired `RTS_INTERNAL` flag, paired
/// with the `RTS_DEBUG`-only form they fold to.
pub const FLAG_FOLDS: &[(&str, &str)] = &[
    (
        "!defined(RTS_DEBUG) && !defined(RTS_INTERNAL)",
        "!defined(RTS_DEBUG)",
    ),
    (
        "!defined(RTS_INTERNAL) && !defined(RTS_DEBUG)",
        "!defined(RTS_DEBUG)",
    ),
    (
        "defined(RTS_DEBUG) || defined(RTS_INTERNAL)",
        "defined(RTS_DEBUG)",
    ),
    (
        "defined(RTS_INTERNAL) || defined(RTS_DEBUG)",
        "defined(RTS_DEBUG)",
    ),
    (
        "defined( RTS_INTERNAL ) || defined( RTS_DEBUG )",
        "defined(RTS_DEBUG)",
    ),
    (
        "defined RTS_DEBUG || defined RTS_INTERNAL",
        "defined(RTS_DEBUG)",
    ),
    ("RTS_DEBUG || RTS_INTERNAL", "RTS_DEBUG"),
];

/// Directive lines (without terminator) that open a block to be dropped.
pub const RETIRED_BLOCK_OPENERS: &[&str] = &["#ifdef RTS_INTERNAL", "#if defined(RTS_INTERNAL)"];

/// The member-style destroy call that gets rewritten.
pub const DELETE_INSTANCE_CALL: &str = "deleteInstance()";

/// Friend declarations of the destroy hook. Lines containing this are left alone.
pub const FRIEND_DELETE_INSTANCE: &str = "friend_deleteInstance()";

/// Static entry point the call-sites are rewritten to.
pub const DELETE_INSTANCE_STATIC: &str = "MemoryPoolObject::deleteInstance";

/// Receiver used when a call-site has no explicit object.
pub const IMPLICIT_RECEIVER: &str = "this";

/// Project roots scanned by the rewrite commands, relative to the repository root.
pub const SOURCE_ROOTS: &[&str] = &["Core", "Generals", "GeneralsMD"];

/// File extensions picked up under each source root.
pub const SOURCE_EXTENSIONS: &[&str] = &["h", "cpp", "inl"];

/// Build manifest file name inside each top-level project folder.
pub const MANIFEST_FILE_NAME: &str = "CMakeLists.txt";

/// Comment marker used to disable a manifest entry.
pub const MANIFEST_COMMENT: char = '#';

/// A whole-file rewrite selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Strip `\r\n"` / `\n"` escapes at the end of logging macro strings.
    LogNewlines,
    /// Rewrite `obj->deleteInstance()` into `MemoryPoolObject::deleteInstance(obj)`.
    DeleteInstance,
    /// Drop `RTS_INTERNAL` blocks and fold mixed `RTS_DEBUG`/`RTS_INTERNAL` conditions.
    RemoveRtsInternal,
    /// Strip trailing whitespace and terminate the last line.
    TrimWhitespace,
}

impl Transform {
    pub const ALL: [Transform; 4] = [
        Transform::LogNewlines,
        Transform::DeleteInstance,
        Transform::RemoveRtsInternal,
        Transform::TrimWhitespace,
    ];

    /// Kebab-case name, as used by the CLI and fixture folders.
    pub fn name(self) -> &'static str {
        match self {
            Transform::LogNewlines => "log-newlines",
            Transform::DeleteInstance => "delete-instance",
            Transform::RemoveRtsInternal => "remove-rts-internal",
            Transform::TrimWhitespace => "trim-whitespace",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the logical project locations a source file can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The original game, `Generals/Code`.
    Generals,
    /// The expansion, `GeneralsMD/Code`.
    ZeroHour,
    /// Code shared by both games, `Core`.
    Core,
}

impl Variant {
    /// Path components of this variant's code root, relative to the repository root.
    pub fn components(self) -> &'static [&'static str] {
        match self {
            Variant::Generals => &["Generals", "Code"],
            Variant::ZeroHour => &["GeneralsMD", "Code"],
            Variant::Core => &["Core"],
        }
    }

    /// The other game variant. `Core` has none.
    pub fn opposite(self) -> Option<Variant> {
        match self {
            Variant::Generals => Some(Variant::ZeroHour),
            Variant::ZeroHour => Some(Variant::Generals),
            Variant::Core => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Generals => write!(f, "Generals"),
            Variant::ZeroHour => write!(f, "GeneralsMD"),
            Variant::Core => write!(f, "Core"),
        }
    }
}

//! JSON relocation plans.
//!
//! ```json
//! {
//!   "operations": [
//!     { "kind": "unify", "from": "zero_hour", "from_file": "GameEngine/Include/Common/crc.h" },
//!     { "kind": "move", "from": "zero_hour", "from_file": "GameEngineDevice/Include/VideoDevice/FFmpeg/FFmpegFile.h" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use cs_rules::Variant;
use serde::{Deserialize, Serialize};

use crate::error::{RelocateError, Result};
use crate::relocate::{unify_file, unify_move_file, Layout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    /// The file exists in both games: see [`unify_file`].
    Unify(Relocation),
    /// The file exists in one game only: see [`unify_move_file`].
    Move(Relocation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    pub from: Variant,
    pub from_file: String,
    #[serde(default = "default_destination")]
    pub to: Variant,
    /// Defaults to `from_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_file: Option<String>,
}

fn default_destination() -> Variant {
    Variant::Core
}

impl Relocation {
    pub fn to_file(&self) -> &str {
        self.to_file.as_deref().unwrap_or(&self.from_file)
    }
}

impl Operation {
    pub fn run(&self, layout: &Layout) -> Result<()> {
        match self {
            Operation::Unify(r) => unify_file(layout, r.from, &r.from_file, r.to, r.to_file()),
            Operation::Move(r) => unify_move_file(layout, r.from, &r.from_file, r.to, r.to_file()),
        }
    }
}

impl Plan {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(RelocateError::io(path))?;
        Self::from_json(&text)
    }

    /// Run every operation in order, stopping at the first failure.
    pub fn apply(&self, layout: &Layout) -> Result<usize> {
        for (i, op) in self.operations.iter().enumerate() {
            tracing::debug!("plan step {}/{}", i + 1, self.operations.len());
            op.run(layout)?;
        }
        Ok(self.operations.len())
    }
}

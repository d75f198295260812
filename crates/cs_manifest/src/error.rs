use std::path::PathBuf;

use cs_rules::Variant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("files can only be unified into Core, not {0}")]
    DestinationNotCore(Variant),

    #[error("{0} has no counterpart variant to unify with")]
    NoCounterpart(Variant),

    #[error("'{0}' does not start with a project folder (expected e.g. GameEngine/...)")]
    NoProjectFolder(String),

    #[error("source file {0} does not exist")]
    MissingSource(PathBuf),

    #[error("manifest {0} is not ASCII text")]
    NonAsciiManifest(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid relocation plan: {0}")]
    Plan(#[from] serde_json::Error),
}

impl RelocateError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| RelocateError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, RelocateError>;

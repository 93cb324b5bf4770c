// Error type shared by the collaborators around the matching engine

use std::path::PathBuf;

/// Errors raised while loading settings or word lists.
///
/// The matching pipeline itself is total and never returns this type.
#[derive(Debug, thiserror::Error)]
pub enum CompletrError {
    /// A file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A settings document was not valid JSON or had fields of the wrong type.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),

    /// An insertion mode label did not name any known mode.
    #[error("unknown insertion mode: {0}")]
    UnknownInsertionMode(String),
}

impl CompletrError {
    /// Wrap an I/O error together with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompletrError::Io {
            path: path.into(),
            source,
        }
    }
}

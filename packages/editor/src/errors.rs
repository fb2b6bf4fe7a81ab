//! Error types for the editor

use thiserror::Error;

/// Failures outside the edit engine itself.
///
/// Applying edits never fails; rejected mutations degrade to no-ops.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the tool boundary. Lookup misses inside a single
/// build script are plain control flow and never appear here; only the
/// terminal "nothing found anywhere" state and bad explicit paths do.
#[derive(Debug, Error)]
pub enum VercodeError {
    /// Every candidate file and every fallback scope was exhausted
    #[error("no '{key}' value found in any build script under app folder '{app_folder}'")]
    NoVersionCodeFound { key: String, app_folder: String },

    /// An explicitly supplied gradle file path does not point at a file
    #[error("no gradle file exists at {path:?}")]
    GradleFileNotFound { path: PathBuf },
}

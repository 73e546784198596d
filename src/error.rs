use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Not a valid directory: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl DumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DumpError::Io {
            path: path.into(),
            source,
        }
    }
}

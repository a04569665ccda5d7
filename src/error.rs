use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Pattern error: {0}")]
    Pattern(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl CombineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::Io {
            path: path.into(),
            source,
        }
    }
}

use std::path::PathBuf;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum FileSaveError {
    #[error("Invalid file name: {0}")]
    InvalidName(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local save-to-disk capability used by the storyline Save action
#[async_trait]
pub trait FileSavePort: Send + Sync {
    /// Persist `contents` under `filename` and return where it landed
    async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, FileSaveError>;
}

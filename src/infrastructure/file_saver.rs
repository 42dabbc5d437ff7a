//! Local save-to-disk adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::outbound::{FileSaveError, FileSavePort};

/// Writes exported files into a single directory
pub struct LocalFileSaver {
    dir: PathBuf,
}

impl LocalFileSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl FileSavePort for LocalFileSaver {
    async fn save(&self, filename: &str, contents: &str) -> Result<PathBuf, FileSaveError> {
        // Only bare file names; nothing may escape the export directory
        let is_bare = Path::new(filename).file_name().and_then(|n| n.to_str()) == Some(filename);
        if filename.is_empty() || !is_bare {
            return Err(FileSaveError::InvalidName(filename.to_string()));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        tokio::fs::write(&path, contents).await?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
        Ok(path)
    }
}

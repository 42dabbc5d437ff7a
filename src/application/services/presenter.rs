//! Result presenter - read-only views of a generation result

use std::path::PathBuf;

use tracing::info;

use crate::application::ports::outbound::{FileSaveError, FileSavePort};
use crate::domain::entities::GenerationResult;

pub const EXPORT_FILENAME: &str = "Generated_Story.txt";
pub const EXPORT_MIME: &str = "text/plain";

/// A result packaged as a downloadable file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub filename: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No story generated yet!")]
    NothingToExport,
    #[error(transparent)]
    Save(#[from] FileSaveError),
}

/// Text shown in the read-only output area
pub fn render(result: &GenerationResult) -> &str {
    &result.text
}

/// Package the text shown in the output area for download
///
/// Whatever is displayed is exported, fallback messages included. Only an
/// empty output area has nothing to export.
pub fn export(result: &GenerationResult) -> Option<ExportedFile> {
    if result.is_empty() {
        return None;
    }
    Some(ExportedFile {
        filename: EXPORT_FILENAME,
        mime: EXPORT_MIME,
        contents: result.text.clone(),
    })
}

/// Write the exported file through the local file-save capability
pub async fn save(
    saver: &dyn FileSavePort,
    result: &GenerationResult,
) -> Result<PathBuf, ExportError> {
    let file = export(result).ok_or(ExportError::NothingToExport)?;
    let path = saver.save(file.filename, &file.contents).await?;
    info!(path = %path.display(), "Saved generated story");
    Ok(path)
}

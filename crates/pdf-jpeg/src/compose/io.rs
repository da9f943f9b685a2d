//! Reading selected files and writing the finished document

use crate::selection::{FileSource, SelectedFile};
use crate::types::*;
use std::path::Path;

/// Read a selected file's full contents
pub(crate) async fn read_file(file: &SelectedFile) -> Result<Vec<u8>> {
    match file.source() {
        FileSource::Path(path) => {
            tokio::fs::read(path)
                .await
                .map_err(|source| ConvertError::Read {
                    name: file.name().to_string(),
                    source,
                })
        }
        FileSource::Memory(bytes) => Ok(bytes.to_vec()),
    }
}

/// Save a converted document
pub async fn save_pdf(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::body::Bytes;
use tempfile::NamedTempFile;

use crate::extraction::DocumentFormat;

/// Writes an upload to a uniquely named file under `dir`. The client's file
/// name is never used as a path. The file is deleted when the returned handle
/// is dropped.
pub async fn stage_upload(dir: &Path, bytes: Bytes, format: DocumentFormat) -> Result<NamedTempFile> {
    let dir: PathBuf = dir.to_path_buf();
    tokio::task::spawn_blocking(move || -> Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(format.suffix())
            .tempfile_in(&dir)
            .with_context(|| format!("Failed to create staging file in {}", dir.display()))?;
        file.write_all(&bytes)
            .context("Failed to write staged upload")?;
        file.flush().context("Failed to flush staged upload")?;
        Ok(file)
    })
    .await?
}

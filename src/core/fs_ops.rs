// src/core/fs_ops.rs
//! File system operations used by the command line front end

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::types::SelectedFile;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Read file safely
    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write file safely, creating the parent directory when needed
    pub async fn write_file_safe(path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!("Written file: {}", path.display());
        Ok(())
    }

    /// Load the file a user picked for upload.
    ///
    /// A path that does not point at a regular file means nothing was
    /// selected, which the upload handler reports as a validation failure.
    pub async fn read_selected_file(path: &Path) -> Result<Option<SelectedFile>> {
        let is_file = fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        if !is_file {
            debug!("No selectable file at {}", path.display());
            return Ok(None);
        }

        let bytes = fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();

        Ok(Some(SelectedFile::new(file_name, bytes)))
    }
}

//! Flat text file backend.
//!
//! Reads and appends go through `tokio::fs`. Full rewrites are written to a temporary file in
//! the same directory and renamed over the backing file, so an interrupted rewrite never
//! leaves a truncated store behind.

use crate::error::{Result, RosterError};
use crate::store::RecordStore;
use async_trait::async_trait;
use std::io::{ErrorKind, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

/// Record store backed by a single text file.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Create a store for `path`. The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordStore for FlatFileStore {
    async fn read_body(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RosterError::at_path(&self.path, err)),
        }
    }

    async fn write_body(&self, content: String) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_atomically(&path, &content))
            .await
            .map_err(|err| RosterError::other(format!("rewrite task failed: {err}")))?
    }

    async fn append_line(&self, mut line: String) -> Result<()> {
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| RosterError::at_path(&self.path, err))?;
        if !ends_with_newline(&mut file)
            .await
            .map_err(|err| RosterError::at_path(&self.path, err))?
        {
            // a hand-edited file may lack the final newline
            line.insert(0, '\n');
        }
        file.write_all(line.as_bytes())
            .await
            .map_err(|err| RosterError::at_path(&self.path, err))?;
        file.flush()
            .await
            .map_err(|err| RosterError::at_path(&self.path, err))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Whether the file is empty or its last byte is a newline.
async fn ends_with_newline(file: &mut tokio::fs::File) -> std::io::Result<bool> {
    if file.metadata().await?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1)).await?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await?;
    Ok(last[0] == b'\n')
}

/// Write `content` next to `path` and rename it into place.
fn replace_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(|err| RosterError::at_path(dir, err))?;
    // keep the permissions of the file being replaced
    if let Ok(metadata) = std::fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|err| RosterError::at_path(staged.path(), err))?;
    }
    staged
        .write_all(content.as_bytes())
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|err| RosterError::at_path(path, err))?;
    staged
        .persist(path)
        .map_err(|err| RosterError::at_path(path, err.error))?;
    Ok(())
}

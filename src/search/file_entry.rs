use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Whole content of one searched file.
pub struct FileEntry {
    path: PathBuf,
    content: String,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::new(path, content))
    }

    /// Like [`FileEntry::read`], but a file holding a NUL byte or invalid UTF-8
    /// is treated as binary and yields `None`. I/O errors are still returned.
    pub fn read_text(path: &Path) -> Result<Option<Self>> {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        if bytes.contains(&b'\x00') {
            return Ok(None);
        }

        Ok(String::from_utf8(bytes)
            .ok()
            .map(|content| Self::new(path, content)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lines split on `\n` only. A trailing newline produces a final empty line.
    pub fn lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }
}

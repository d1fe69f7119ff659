use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// Temporary project tree, removed when dropped.
pub struct ScratchDir(TempDir);

impl ScratchDir {
    pub fn new() -> Self {
        Self(
            tempfile::Builder::new()
                .prefix("mapcheck-")
                .tempdir()
                .expect("cannot create scratch directory"),
        )
    }

    pub fn path(&self) -> &Path {
        self.0.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        self.write_bytes(relative, content.as_bytes())
    }

    /// Writes `content` under a `/`-separated relative path, creating parent directories.
    pub fn write_bytes(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = relative
            .split('/')
            .fold(self.path().to_path_buf(), |p, c| p.join(c));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("cannot create parent directory");
        }
        fs::write(&path, content).expect("cannot write scratch file");
        path
    }
}

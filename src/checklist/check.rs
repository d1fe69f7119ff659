use std::path::{Path, PathBuf};

use super::project_fs::ProjectFs;
use crate::style::Painter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Check {
    /// Passes when `path` exists.
    Exists {
        path: &'static str,
        label: &'static str,
    },
    /// Passes when the content of `path` contains `needle` byte for byte.
    Contains {
        path: &'static str,
        needle: &'static str,
        label: &'static str,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Exists {
        label: &'static str,
        path: PathBuf,
        exists: bool,
    },
    Contains {
        label: &'static str,
        found: bool,
    },
    ReadError {
        path: PathBuf,
        error: String,
    },
}

/// Joins a `/`-separated project path onto `base` with the platform separator.
pub fn project_path(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .fold(base.to_path_buf(), |path, component| path.join(component))
}

impl Check {
    pub fn evaluate(&self, base: &Path, fs: &impl ProjectFs) -> CheckOutcome {
        match *self {
            Check::Exists { path, label } => {
                let path = project_path(base, path);
                CheckOutcome::Exists {
                    label,
                    exists: fs.exists(&path),
                    path,
                }
            }
            Check::Contains {
                path,
                needle,
                label,
            } => {
                let path = project_path(base, path);
                match fs.read_to_string(&path) {
                    Ok(content) => CheckOutcome::Contains {
                        label,
                        found: content.contains(needle),
                    },
                    Err(error) => CheckOutcome::ReadError {
                        path,
                        error: error.to_string(),
                    },
                }
            }
        }
    }
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        match self {
            CheckOutcome::Exists { exists, .. } => *exists,
            CheckOutcome::Contains { found, .. } => *found,
            CheckOutcome::ReadError { .. } => false,
        }
    }

    pub fn render(&self, painter: &Painter) -> String {
        let mark = painter.mark(self.passed());
        match self {
            CheckOutcome::Exists { label, path, .. } => {
                format!("{mark} {label}: {}", path.display())
            }
            CheckOutcome::Contains { label, .. } => format!("{mark} {label}"),
            CheckOutcome::ReadError { path, error } => {
                format!("{mark} Error leyendo {}: {error}", path.display())
            }
        }
    }
}

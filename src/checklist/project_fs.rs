use std::{io, path::Path};

/// Read access to the project under verification.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectFs {
    fn exists(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

pub struct DiskFs;

impl ProjectFs for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

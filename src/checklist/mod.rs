mod check;
pub mod electricity;
mod project_fs;
mod verifier;

pub use check::Check;
pub use project_fs::{DiskFs, ProjectFs};
pub use verifier::Verifier;

/// A titled group of checks printed under a numbered heading.
#[derive(Clone, Debug)]
pub struct Section {
    pub title: &'static str,
    pub checks: Vec<Check>,
}

#[derive(Clone, Debug)]
pub struct Checklist {
    pub title: &'static str,
    pub sections: Vec<Section>,
    pub completed: &'static str,
    /// Manual steps printed after the automated checks.
    pub follow_up_intro: &'static str,
    pub follow_up: Vec<&'static str>,
}

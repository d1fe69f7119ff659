use anyhow::{ensure, Result};
use ignore::overrides::{Override, OverrideBuilder};
use itertools::Itertools;
use std::path::PathBuf;

use super::context::ContextWindow;

pub const DEFAULT_CONFIG_FILE: &str = "js/map-config.js";

const HIGHLIGHT_FUNCTIONS: [&str; 4] = [
    "showStatesLayer",
    "showGCRLayer",
    "filterElectricity",
    "hideGeometryLayers",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `=== Searching for ===` section per keyword, with a notice for keywords never found.
    PerKeyword,
    /// Total line count, then every match of every keyword without section headers.
    Flat,
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
    pub keywords: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub window: ContextWindow,
    pub case_insensitive: bool,
    pub layout: Layout,
    pub overrides: Override,
    pub search_hidden: bool,
}

impl SearchConfig {
    pub fn from(keywords: Vec<String>, paths: Vec<PathBuf>) -> Result<Self> {
        ensure!(!keywords.is_empty(), "at least one keyword is required");
        let invalid = keywords
            .iter()
            .filter(|k| k.is_empty() || k.contains('\n'))
            .map(|k| format!("{k:?}"))
            .join(", ");
        ensure!(
            invalid.is_empty(),
            "keywords must be non-empty and fit on a single line: {invalid}"
        );

        Ok(Self {
            keywords,
            paths,
            window: ContextWindow::new(1, 5),
            case_insensitive: false,
            layout: Layout::PerKeyword,
            overrides: Override::empty(),
            search_hidden: false,
        })
    }

    /// Where the layer highlighting functions are defined and called.
    pub fn functions(path: PathBuf) -> Result<Self> {
        Self::from(
            HIGHLIGHT_FUNCTIONS.iter().map(|f| f.to_string()).collect(),
            vec![path],
        )
    }

    /// Every mention of the welcome screen, in any letter case.
    pub fn welcome(path: PathBuf) -> Result<Self> {
        Ok(Self::from(vec!["welcome".into()], vec![path])?
            .window(ContextWindow::new(2, 3))
            .case_insensitive(true)
            .layout(Layout::Flat))
    }

    pub fn window(mut self, window: ContextWindow) -> Self {
        self.window = window;
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn globs(mut self, globs: Vec<String>) -> Result<Self> {
        let mut builder = OverrideBuilder::new(std::env::current_dir()?);
        for glob in globs {
            builder.add(&glob)?;
        }
        self.overrides = builder.build()?;
        Ok(self)
    }

    pub fn search_hidden(mut self, search_hidden: bool) -> Self {
        self.search_hidden = search_hidden;
        self
    }
}

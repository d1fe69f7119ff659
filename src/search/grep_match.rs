#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrepMatch {
    pub line_number: u64,
}

impl GrepMatch {
    pub fn new(line_number: u64) -> Self {
        Self { line_number }
    }
}

/// All lines of a single file matching one keyword, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordMatches {
    pub keyword: String,
    pub matches: Vec<GrepMatch>,
}

impl KeywordMatches {
    pub fn new(keyword: String, matches: Vec<GrepMatch>) -> Self {
        Self { keyword, matches }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

use anyhow::Result;
use grep::{
    matcher::LineTerminator,
    regex::RegexMatcherBuilder,
    searcher::{BinaryDetection, SearcherBuilder},
};
use ignore::WalkBuilder;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use super::{
    file_entry::FileEntry,
    grep_match::{GrepMatch, KeywordMatches},
    report::Report,
    sink::MatchesSink,
    SearchConfig,
};
use crate::style::Painter;

/// Searches every file named by `config` and prints a context report for each.
/// Any unreadable file aborts the whole run. Returns the total number of matched lines.
pub fn run<W: Write>(config: &SearchConfig, painter: Painter, out: &mut W) -> Result<usize> {
    let files = collect_files(config)?;
    let with_file_headers = files.len() > 1;
    let mut total_matches = 0;

    for file in files {
        let entry = match file {
            SearchFile::Named(path) => FileEntry::read(&path)?,
            SearchFile::Walked(path) => match FileEntry::read_text(&path)? {
                Some(entry) => entry,
                None => continue,
            },
        };
        let results = config
            .keywords
            .iter()
            .map(|keyword| {
                find_matches(entry.content(), keyword, config.case_insensitive)
                    .map(|matches| KeywordMatches::new(keyword.clone(), matches))
            })
            .collect::<Result<Vec<_>>>()?;
        total_matches += results.iter().map(|r| r.matches.len()).sum::<usize>();

        let mut report = Report::new(out, painter);
        if with_file_headers {
            report.file_header(&entry)?;
        }
        report.write_entry(&entry, &results, config.window, config.layout)?;
    }

    Ok(total_matches)
}

/// Every line of `content` containing `keyword` as a literal substring, once per line.
pub fn find_matches(content: &str, keyword: &str, case_insensitive: bool) -> Result<Vec<GrepMatch>> {
    let matcher = RegexMatcherBuilder::new()
        .line_terminator(Some(b'\n'))
        .fixed_strings(true)
        .case_insensitive(case_insensitive)
        .build(keyword)?;

    let mut grep_searcher = SearcherBuilder::new()
        .binary_detection(BinaryDetection::none())
        .line_terminator(LineTerminator::byte(b'\n'))
        .line_number(true)
        .multi_line(false)
        .build();

    let mut matches = Vec::new();
    grep_searcher.search_slice(&matcher, content.as_bytes(), MatchesSink::new(&mut matches))?;

    Ok(matches)
}

enum SearchFile {
    /// Given on the command line. Must be readable text.
    Named(PathBuf),
    /// Found under a directory. Skipped when binary.
    Walked(PathBuf),
}

/// Expands directories into the files beneath them, sorted by name. Plain paths are
/// kept as given so that a missing file surfaces as a read error.
fn collect_files(config: &SearchConfig) -> Result<Vec<SearchFile>> {
    let mut files = Vec::new();

    for path in &config.paths {
        if !path.is_dir() {
            files.push(SearchFile::Named(path.clone()));
            continue;
        }

        files.extend(walk_directory(path, config)?.into_iter().map(SearchFile::Walked));
    }

    Ok(files)
}

fn walk_directory(path: &Path, config: &SearchConfig) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(path);
    let walker = builder
        .overrides(config.overrides.clone())
        .hidden(!config.search_hidden)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for result in walker.build() {
        let dir_entry = result?;
        if dir_entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(dir_entry.into_path());
        }
    }

    Ok(files)
}

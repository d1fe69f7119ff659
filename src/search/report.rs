use std::io::{self, Write};

use super::{
    context::{ContextBlock, ContextWindow},
    file_entry::FileEntry,
    grep_match::KeywordMatches,
    search_config::Layout,
};
use crate::style::Painter;

pub struct Report<'a, W: Write> {
    out: &'a mut W,
    painter: Painter,
}

impl<'a, W: Write> Report<'a, W> {
    pub fn new(out: &'a mut W, painter: Painter) -> Self {
        Self { out, painter }
    }

    pub fn file_header(&mut self, entry: &FileEntry) -> io::Result<()> {
        writeln!(
            self.out,
            "### {} ({} lines)",
            self.painter.file_path(entry.path().display()),
            entry.lines().len()
        )
    }

    pub fn write_entry(
        &mut self,
        entry: &FileEntry,
        results: &[KeywordMatches],
        window: ContextWindow,
        layout: Layout,
    ) -> io::Result<()> {
        let lines = entry.lines();
        match layout {
            Layout::PerKeyword => {
                for keyword_matches in results {
                    writeln!(
                        self.out,
                        "\n=== Searching for: {} ===",
                        keyword_matches.keyword
                    )?;
                    for grep_match in &keyword_matches.matches {
                        let block = ContextBlock::new(&lines, grep_match, window);
                        writeln!(self.out, "\nFound at line {}:", block.line_number)?;
                        self.write_block(&block)?;
                    }

                    if keyword_matches.is_empty() {
                        writeln!(self.out, "{}", self.painter.not_found("NOT FOUND in file"))?;
                    }
                }
            }
            Layout::Flat => {
                writeln!(self.out, "Total lines: {}\n", lines.len())?;
                for grep_match in results.iter().flat_map(|r| r.matches.iter()) {
                    let block = ContextBlock::new(&lines, grep_match, window);
                    writeln!(self.out, "Found at line {}:", block.line_number)?;
                    self.write_block(&block)?;
                    writeln!(self.out)?;
                }
            }
        }

        Ok(())
    }

    fn write_block(&mut self, block: &ContextBlock) -> io::Result<()> {
        for line in &block.lines {
            let marker = if line.is_match {
                self.painter.match_marker()
            } else {
                "   ".into()
            };
            writeln!(
                self.out,
                "{marker} {}: {}",
                self.painter.line_number(line.line_number),
                line.text
            )?;
        }

        Ok(())
    }
}

use std::ops::Range;

use super::grep_match::GrepMatch;

/// Number of lines shown before and after every matched line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextWindow {
    pub before: usize,
    pub after: usize,
}

impl ContextWindow {
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// 0-based, end-exclusive line indices around the 1-based `line_number`,
    /// clamped to a file of `lines_count` lines.
    pub fn range(&self, line_number: u64, lines_count: usize) -> Range<usize> {
        let index = (line_number.max(1) - 1) as usize;
        let end = index
            .saturating_add(1)
            .saturating_add(self.after)
            .min(lines_count);
        let start = index.saturating_sub(self.before).min(end);
        start..end
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ContextLine<'a> {
    pub line_number: usize,
    pub text: &'a str,
    pub is_match: bool,
}

/// Lines surrounding one match, ready to be printed.
#[derive(Debug, PartialEq, Eq)]
pub struct ContextBlock<'a> {
    pub line_number: u64,
    pub lines: Vec<ContextLine<'a>>,
}

impl<'a> ContextBlock<'a> {
    pub fn new(lines: &[&'a str], grep_match: &GrepMatch, window: ContextWindow) -> Self {
        let match_index = (grep_match.line_number.max(1) - 1) as usize;
        let lines = window
            .range(grep_match.line_number, lines.len())
            .map(|index| ContextLine {
                line_number: index + 1,
                text: lines[index],
                is_match: index == match_index,
            })
            .collect();

        Self {
            line_number: grep_match.line_number,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ContextWindow::new(1, 5), 1, 10 => 0..6 ; "first line")]
    #[test_case(ContextWindow::new(1, 5), 4, 10 => 2..9 ; "middle")]
    #[test_case(ContextWindow::new(1, 5), 10, 10 => 8..10 ; "last line")]
    #[test_case(ContextWindow::new(2, 3), 2, 3 => 0..3 ; "window wider than file")]
    #[test_case(ContextWindow::new(0, 0), 7, 10 => 6..7 ; "match only")]
    #[test_case(ContextWindow::new(2, 3), 120, 400 => 117..123 ; "welcome window")]
    #[test_case(ContextWindow::new(1, usize::MAX), 2, 3 => 0..3 ; "huge after")]
    #[test_case(ContextWindow::new(usize::MAX, usize::MAX), 2, 3 => 0..3 ; "huge both")]
    fn range(window: ContextWindow, line_number: u64, lines_count: usize) -> Range<usize> {
        window.range(line_number, lines_count)
    }

    #[test]
    fn range_stays_within_file_bounds() {
        let window = ContextWindow::new(3, 3);
        for lines_count in 1..8 {
            for line_number in 1..=lines_count as u64 {
                let range = window.range(line_number, lines_count);
                assert!(range.start <= range.end);
                assert!(range.end <= lines_count);
                assert!(range.contains(&((line_number - 1) as usize)));
            }
        }
    }

    #[test]
    fn block_marks_only_matched_line() {
        let lines = vec!["a", "b", "c", "d"];
        let block = ContextBlock::new(
            &lines,
            &GrepMatch::new(2),
            ContextWindow::new(1, 1),
        );

        assert_eq!(block.line_number, 2);
        assert_eq!(
            block.lines,
            vec![
                ContextLine {
                    line_number: 1,
                    text: "a",
                    is_match: false
                },
                ContextLine {
                    line_number: 2,
                    text: "b",
                    is_match: true
                },
                ContextLine {
                    line_number: 3,
                    text: "c",
                    is_match: false
                },
            ]
        );
    }
}

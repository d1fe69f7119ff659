use std::{
    io::{self, Write},
    path::Path,
};

use super::{Checklist, ProjectFs};
use crate::style::Painter;

const BANNER_WIDTH: usize = 60;

/// Pass/fail tally of one verification run.
#[must_use]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
}

pub struct Verifier<'a, F: ProjectFs> {
    base: &'a Path,
    fs: F,
    painter: Painter,
}

impl<'a, F: ProjectFs> Verifier<'a, F> {
    pub fn new(base: &'a Path, fs: F, painter: Painter) -> Self {
        Self { base, fs, painter }
    }

    /// Evaluates every check in order and prints the report. Failed checks never
    /// stop the run; only a failure to write the output is returned as an error.
    pub fn run<W: Write>(&self, checklist: &Checklist, out: &mut W) -> io::Result<Report> {
        let banner = "=".repeat(BANNER_WIDTH);
        let rule = "-".repeat(BANNER_WIDTH);
        let mut report = Report::default();

        writeln!(out, "{banner}\n{}\n{banner}\n", checklist.title)?;

        for (number, section) in checklist.sections.iter().enumerate() {
            writeln!(out, "{}. {}:\n{rule}", number + 1, section.title)?;
            for check in &section.checks {
                let outcome = check.evaluate(self.base, &self.fs);
                if outcome.passed() {
                    report.passed += 1;
                } else {
                    report.failed += 1;
                }
                writeln!(out, "{}", outcome.render(&self.painter))?;
            }
            writeln!(out)?;
        }

        writeln!(out, "{banner}\n{}\n{banner}\n", checklist.completed)?;
        writeln!(out, "{}", checklist.follow_up_intro)?;
        for (number, step) in checklist.follow_up.iter().enumerate() {
            writeln!(out, "  {}. {step}", number + 1)?;
        }
        writeln!(out)?;

        Ok(report)
    }
}

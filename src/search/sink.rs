use grep::searcher::{Searcher, Sink, SinkMatch};
use std::io;

use super::grep_match::GrepMatch;

pub(crate) struct MatchesSink<'a> {
    matches: &'a mut Vec<GrepMatch>,
}

impl<'a> MatchesSink<'a> {
    pub(crate) fn new(matches: &'a mut Vec<GrepMatch>) -> Self {
        Self { matches }
    }
}

impl Sink for MatchesSink<'_> {
    type Error = io::Error;

    fn matched(&mut self, _: &Searcher, sink_match: &SinkMatch) -> Result<bool, io::Error> {
        let line_number = sink_match
            .line_number()
            .ok_or(io::ErrorKind::InvalidData)?;
        self.matches.push(GrepMatch::new(line_number));

        Ok(true)
    }
}

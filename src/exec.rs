//! Iteration over successive matches.

use crate::api::Match;
use crate::classicalbacktrack::BacktrackExecutor;

/// Non-overlapping matches from a start position. After an empty match the
/// search resumes one byte further on.
#[derive(Debug)]
pub struct Matches<'r, 't> {
    executor: BacktrackExecutor<'r, 't>,
    next_start: Option<usize>,
}

impl<'r, 't> Matches<'r, 't> {
    pub fn new(executor: BacktrackExecutor<'r, 't>, start: usize) -> Self {
        Matches {
            executor,
            next_start: Some(start),
        }
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;
    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start.take()?;
        self.executor.find_match(start, &mut self.next_start)
    }
}

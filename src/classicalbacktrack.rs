//! Classical backtracking execution engine

use crate::api::Match;
use crate::bytesearch;
use crate::insn::{CompiledRegex, Insn, StartPredicate};
use crate::matchers;

/// An instruction pointer.
pub type IP = usize;

#[derive(Debug)]
pub(crate) struct MatchAttempter<'r, 't> {
    re: &'r CompiledRegex,
    text: &'t [u8],
}

impl<'r, 't> MatchAttempter<'r, 't> {
    pub(crate) fn new(re: &'r CompiledRegex, text: &'t [u8]) -> Self {
        Self { re, text }
    }

    /// If the byte at \p pos satisfies \p pred, step past it.
    #[inline(always)]
    fn consume_if<F: Fn(u8) -> bool>(&self, pos: &mut usize, pred: F) -> bool {
        match self.text.get(*pos) {
            Some(&b) if pred(b) => {
                *pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Attempt to match the instructions from \p ip onwards at \p pos.
    /// \return the end of the match, or None.
    ///
    /// Instructions other than closures are handled in a loop; each closure
    /// recurses once per byte it gives back, so the recursion depth is
    /// bounded by the number of closures in the regex.
    pub(crate) fn try_at_pos(&self, mut ip: IP, mut pos: usize) -> Option<usize> {
        let re = self.re;
        let text = self.text;
        let icase = re.icase;
        loop {
            // Helper macro to either increment ip and go to the next insn, or fail.
            macro_rules! next_or_fail {
                ($e:expr) => {
                    if $e {
                        ip += 1;
                        continue;
                    } else {
                        return None;
                    }
                };
            }

            match &re.insns[ip] {
                Insn::Goal => return Some(pos),

                &Insn::Char(c) => {
                    next_or_fail!(self.consume_if(&mut pos, |b| matchers::char_matches(c, b, icase)))
                }

                Insn::Any => next_or_fail!(self.consume_if(&mut pos, |_| true)),

                Insn::Class(bitmap) => {
                    next_or_fail!(self.consume_if(&mut pos, |b| bitmap.contains(b)))
                }

                // The true start of the text, not where the search began.
                Insn::StartOfLine => next_or_fail!(pos == 0),

                Insn::EndOfLine => next_or_fail!(pos == text.len()),

                Insn::StartOfWord => next_or_fail!(matchers::is_start_of_word(text, pos)),

                Insn::EndOfWord => next_or_fail!(matchers::is_end_of_word(text, pos)),

                Insn::Closure { kind, atom } => {
                    // Consume as much as we can.
                    let max_iters = kind.max_iters();
                    let mut iters = 0;
                    while iters < max_iters
                        && text
                            .get(pos + iters)
                            .is_some_and(|&b| matchers::atom_matches(atom, b, icase))
                    {
                        iters += 1;
                    }

                    // Then give it back one byte at a time, rightmost first.
                    loop {
                        if let Some(end) = self.try_at_pos(ip + 1, pos + iters) {
                            return Some(end);
                        }
                        if iters == 0 {
                            return None;
                        }
                        iters -= 1;
                    }
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct BacktrackExecutor<'r, 't> {
    text: &'t [u8],
    matcher: MatchAttempter<'r, 't>,
}

impl<'r, 't> BacktrackExecutor<'r, 't> {
    pub fn new(re: &'r CompiledRegex, text: &'t [u8]) -> Self {
        Self {
            text,
            matcher: MatchAttempter::new(re, text),
        }
    }

    /// Find the leftmost match starting at or after \p start.
    /// A \p start beyond the end of the text never matches.
    pub fn match_at(&self, start: usize) -> Option<Match> {
        let mut next_start = None;
        self.find_match(start, &mut next_start)
    }

    /// Record a successful match from \p start to \p end.
    fn successful_match(
        &self,
        start: usize,
        end: usize,
        next_start: &mut Option<usize>,
    ) -> Match {
        // If we matched the empty string, we have to increment.
        *next_start = if end != start {
            Some(end)
        } else if end < self.text.len() {
            Some(end + 1)
        } else {
            None
        };
        Match { range: start..end }
    }

    /// \return the next match, searching the remaining bytes using the given
    /// prefix searcher to quickly find the first potential match location.
    fn next_match_with_prefix_search<PrefixSearch: bytesearch::ByteSearcher>(
        &self,
        mut pos: usize,
        next_start: &mut Option<usize>,
        prefix_search: &PrefixSearch,
    ) -> Option<Match> {
        let text = self.text;
        loop {
            // Find the next start location, or None if none.
            pos += prefix_search.find_in(&text[pos..])?;
            if let Some(end) = self.matcher.try_at_pos(0, pos) {
                return Some(self.successful_match(pos, end, next_start));
            }
            // Didn't find it at this position, try the next one.
            if pos >= text.len() {
                return None;
            }
            pos += 1;
        }
    }

    /// Find the leftmost match at or after \p pos, storing where the search
    /// for the following match resumes in \p next_start.
    pub(crate) fn find_match(
        &self,
        pos: usize,
        next_start: &mut Option<usize>,
    ) -> Option<Match> {
        if pos > self.text.len() {
            return None;
        }
        match &self.matcher.re.start_pred {
            StartPredicate::StartAnchored => {
                let end = self.matcher.try_at_pos(0, pos)?;
                Some(self.successful_match(pos, end, next_start))
            }
            StartPredicate::Arbitrary => {
                self.next_match_with_prefix_search(pos, next_start, &bytesearch::EmptyString {})
            }
            &StartPredicate::Byte(b) => {
                self.next_match_with_prefix_search(pos, next_start, &bytesearch::SingleByte(b))
            }
            &StartPredicate::ByteICase(lower, upper) => self.next_match_with_prefix_search(
                pos,
                next_start,
                &bytesearch::BytePair(lower, upper),
            ),
            StartPredicate::ByteSet(bitmap) => {
                self.next_match_with_prefix_search(pos, next_start, bitmap)
            }
        }
    }
}

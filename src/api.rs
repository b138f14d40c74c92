use crate::classicalbacktrack::BacktrackExecutor;
use crate::exec;
use crate::insn::CompiledRegex;
use crate::parse::{self, Error, ErrorKind};
use crate::wildcard;

use core::hash::{Hash, Hasher};
use core::{fmt, str::FromStr};

/// Flags used to control regex compilation.
/// The default flags are case-sensitive, not wildcard, and optimizing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// If set, make the regex case-insensitive.
    /// Only ASCII letters fold.
    pub icase: bool,

    /// If set, the pattern is a wildcard (glob) pattern, and is translated
    /// with [`wc2rx`](crate::wc2rx) before compiling.
    pub wildcard: bool,

    /// If set, disable the start-position prefilter.
    pub no_opt: bool,
}

impl Flags {
    /// Construct a Flags from an iterator of flag letters.
    /// 'i' means to ignore case, 'w' means wildcard.
    /// Other letters are ignored.
    #[inline]
    pub fn new<T: Iterator<Item = char>>(chars: T) -> Self {
        let mut result = Self::default();
        for c in chars {
            match c {
                'i' => {
                    result.icase = true;
                }
                'w' => {
                    result.wildcard = true;
                }
                _ => {
                    // Silently skip unsupported flags.
                }
            }
        }
        result
    }
}

impl From<&str> for Flags {
    /// Construct a Flags from a string of flag letters.
    ///
    /// See also: [`Flags::new`].
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.icase {
            f.write_str("i")?;
        }
        if self.wildcard {
            f.write_str("w")?;
        }
        Ok(())
    }
}

/// Range is used to express the extent of a match, as byte offsets into the
/// input string.
pub type Range = core::ops::Range<usize>;

/// A Match represents a portion of a string which was found to match a
/// RegExp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The total range of the match. Note this may be empty, if the regex
    /// matched an empty string.
    pub range: Range,
}

impl Match {
    /// Returns the range over the starting and ending byte offsets of the
    /// match in the haystack.
    ///
    /// This is a convenience function to work around
    /// the fact that Range does not support Copy.
    #[inline]
    pub fn range(&self) -> Range {
        self.range.clone()
    }

    /// Returns the starting byte offset of the match in the haystack.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// Returns the ending byte offset of the match in the haystack.
    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Returns the length of the match in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// An iterator type which yields non-overlapping `Match`es found in a string.
/// A RegExp which failed to compile yields nothing.
#[derive(Debug)]
pub struct Matches<'r, 't>(Option<exec::Matches<'r, 't>>);

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    #[inline]
    fn next(&mut self) -> Option<Match> {
        self.0.as_mut()?.next()
    }
}

/// A RegExp owns a pattern, the flags it was compiled with, and either the
/// compiled form or the error compiling it produced.
///
/// Compilation errors are stored rather than returned: matching against an
/// invalid RegExp finds nothing, and setting a new pattern recovers.
///
/// ```rust
/// use rxlite::{ErrorKind, RegExp};
/// let mut re = RegExp::new("[abc");
/// assert_eq!(re.error_kind(), Some(ErrorKind::Syntax));
/// assert!(re.find("abc", 0).is_none());
/// re.set_pattern("[abc]");
/// assert_eq!(re.find("xxbxx", 0).unwrap().range(), 2..3);
/// ```
#[derive(Debug, Clone)]
pub struct RegExp {
    pattern: String,
    flags: Flags,
    compiled: Result<CompiledRegex, Error>,
}

impl RegExp {
    /// Construct a case-sensitive, non-wildcard RegExp from `pattern`.
    #[inline]
    pub fn new(pattern: &str) -> RegExp {
        Self::with_flags(pattern, Flags::default())
    }

    /// Construct a RegExp from `pattern` with `flags`.
    ///
    /// ```rust
    /// use rxlite::RegExp;
    /// let re = RegExp::with_flags("*.cpp", "iw");
    /// assert!(re.find("MAIN.CPP", 0).is_some());
    /// ```
    pub fn with_flags<F>(pattern: &str, flags: F) -> RegExp
    where
        F: Into<Flags>,
    {
        let flags = flags.into();
        RegExp {
            pattern: pattern.to_string(),
            flags,
            compiled: compile(pattern, flags),
        }
    }

    fn recompile(&mut self) {
        self.compiled = compile(&self.pattern, self.flags);
    }

    /// Replace the pattern text and recompile. Flags are unchanged.
    pub fn set_pattern(&mut self, pattern: &str) {
        self.pattern.clear();
        self.pattern.push_str(pattern);
        self.recompile();
    }

    /// Set case sensitivity, recompiling if it changed.
    pub fn set_case_sensitive(&mut self, enable: bool) {
        if self.flags.icase == !enable {
            return;
        }
        self.flags.icase = !enable;
        self.recompile();
    }

    /// Set wildcard mode, recompiling if it changed.
    pub fn set_wildcard(&mut self, enable: bool) {
        if self.flags.wildcard == enable {
            return;
        }
        self.flags.wildcard = enable;
        self.recompile();
    }

    /// Enable or disable the start-position prefilter, recompiling if it
    /// changed. This never changes which matches are found.
    pub fn set_optimize(&mut self, enable: bool) {
        if self.flags.no_opt == !enable {
            return;
        }
        self.flags.no_opt = !enable;
        self.recompile();
    }

    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    pub fn case_sensitive(&self) -> bool {
        !self.flags.icase
    }

    #[inline]
    pub fn wildcard(&self) -> bool {
        self.flags.wildcard
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// \return whether the pattern compiled.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.compiled.is_ok()
    }

    /// \return the compilation error, if any.
    #[inline]
    pub fn error(&self) -> Option<&Error> {
        self.compiled.as_ref().err()
    }

    #[inline]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(|e| e.kind)
    }

    /// Access the compiled form, if the pattern compiled.
    #[inline]
    pub fn compiled(&self) -> Option<&CompiledRegex> {
        self.compiled.as_ref().ok()
    }

    /// Searches `text` for the leftmost match starting at or after the byte
    /// offset `start`.
    ///
    /// A pattern anchored with `^` is only tried at `start` itself, and only
    /// matches if `start` is 0.
    #[inline]
    pub fn match_at(&self, text: &str, start: usize) -> Option<Match> {
        self.match_bytes(text.as_bytes(), start)
    }

    /// Like [`match_at`](Self::match_at), for arbitrary bytes.
    #[inline]
    pub fn match_bytes(&self, text: &[u8], start: usize) -> Option<Match> {
        let cr = self.compiled()?;
        backends::find_at(cr, text, start)
    }

    /// Searches `text` for the first match at or after `start`.
    #[inline]
    pub fn find(&self, text: &str, start: usize) -> Option<Match> {
        self.match_at(text, start)
    }

    /// Searches backwards for a match. Each start position from `from`
    /// (or the end of `text`) down to 0 is tried in turn, and the first match
    /// that begins exactly at its candidate position is returned.
    ///
    /// ```rust
    /// use rxlite::RegExp;
    /// let re = RegExp::new("ab");
    /// assert_eq!(re.find_rev("abxab", None).unwrap().start(), 3);
    /// assert_eq!(re.find_rev("abxab", Some(2)).unwrap().start(), 0);
    /// ```
    pub fn find_rev(&self, text: &str, from: Option<usize>) -> Option<Match> {
        let text = text.as_bytes();
        let cr = self.compiled()?;
        let last = from.map_or(text.len(), |from| from.min(text.len()));
        (0..=last).rev().find_map(|pos| {
            backends::find_at(cr, text, pos).filter(|m| m.start() == pos)
        })
    }

    /// Counts the matches in `text`, including overlapping ones: after each
    /// match the search restarts one byte past where it began.
    ///
    /// ```rust
    /// use rxlite::RegExp;
    /// assert_eq!(RegExp::new("a[nm]a").count("banana and panama"), 4);
    /// ```
    pub fn count(&self, text: &str) -> usize {
        let text = text.as_bytes();
        let cr = match self.compiled() {
            Some(cr) => cr,
            None => return 0,
        };
        if text.is_empty() {
            return usize::from(backends::find_at(cr, text, 0).is_some());
        }
        let mut count = 0;
        let mut start = 0;
        while start < text.len() {
            match backends::find_at(cr, text, start) {
                Some(m) => {
                    count += 1;
                    start = m.start() + 1;
                }
                None => break,
            }
        }
        count
    }

    /// Replaces every match in `text` with `with`.
    ///
    /// Scanning resumes after each inserted replacement. An empty match is
    /// replaced once and then replacement stops, so a pattern such as
    /// `[a-z]*` cannot loop forever.
    ///
    /// ```rust
    /// use rxlite::RegExp;
    /// let re = RegExp::new("[0-9]+");
    /// assert_eq!(re.replace_all("a1b22c333", "#"), "a#b#c#");
    /// ```
    pub fn replace_all(&self, text: &str, with: &str) -> String {
        let replaced = self.replace_all_bytes(text.as_bytes(), with.as_bytes());
        // Matches are byte ranges, and may split a multi-byte character.
        match String::from_utf8(replaced) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    /// Like [`replace_all`](Self::replace_all), for arbitrary bytes.
    pub fn replace_all_bytes(&self, text: &[u8], with: &[u8]) -> Vec<u8> {
        let mut result = text.to_vec();
        let cr = match self.compiled() {
            Some(cr) => cr,
            None => return result,
        };
        let mut index = 0;
        while index <= result.len() {
            let m = match backends::find_at(cr, &result, index) {
                Some(m) => m,
                None => break,
            };
            result.splice(m.range(), with.iter().copied());
            index = m.start() + with.len();
            if m.is_empty() {
                break;
            }
        }
        result
    }

    /// Searches `text`, returning an iterator over non-overlapping matches.
    /// After an empty match the search resumes one byte later.
    ///
    /// ```rust
    /// use rxlite::RegExp;
    /// let text = "one 22 three 4444";
    /// let nums: Vec<&str> = RegExp::new("[0-9]+")
    ///     .find_iter(text)
    ///     .map(|m| &text[m.range()])
    ///     .collect();
    /// assert_eq!(nums, vec!["22", "4444"]);
    /// ```
    #[inline]
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.find_from(text, 0)
    }

    /// Returns an iterator for matches found in `text` starting at byte
    /// index `start`. A `^` anchor still refers to the start of `text`.
    ///
    /// ```rust
    /// use rxlite::RegExp;
    /// let re = RegExp::new("^x");
    /// assert!(re.find_from("xx", 1).next().is_none());
    /// assert!(re.find(&"xx"[1..], 0).is_some());
    /// ```
    #[inline]
    pub fn find_from<'r, 't>(&'r self, text: &'t str, start: usize) -> Matches<'r, 't> {
        self.find_from_bytes(text.as_bytes(), start)
    }

    /// Like [`find_from`](Self::find_from), for arbitrary bytes.
    #[inline]
    pub fn find_from_bytes<'r, 't>(&'r self, text: &'t [u8], start: usize) -> Matches<'r, 't> {
        Matches(self.compiled().map(|cr| backends::find(cr, text, start)))
    }
}

/// Compile a pattern with the given flags, translating it first in wildcard
/// mode.
fn compile(pattern: &str, flags: Flags) -> Result<CompiledRegex, Error> {
    let translated;
    let source = if flags.wildcard {
        translated = wildcard::wc2rx(pattern);
        translated.as_str()
    } else {
        pattern
    };
    let result = parse::try_parse(source.as_bytes(), flags);
    match &result {
        Ok(cr) => log::trace!(
            "compiled {:?} (flags {:?}) into {} words",
            source,
            flags.to_string(),
            cr.word_count
        ),
        Err(err) => log::debug!("rejected pattern {:?}: {}", source, err),
    }
    result
}

impl Default for RegExp {
    /// An empty RegExp. This is invalid, with [`ErrorKind::Null`].
    fn default() -> Self {
        RegExp::new("")
    }
}

impl PartialEq for RegExp {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.flags.icase == other.flags.icase
            && self.flags.wildcard == other.flags.wildcard
    }
}

impl Eq for RegExp {}

impl Hash for RegExp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
        self.flags.icase.hash(state);
        self.flags.wildcard.hash(state);
    }
}

impl FromStr for RegExp {
    type Err = Error;

    /// Attempts to parse a string into a regular expression, returning the
    /// compilation error if there is one.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        let re = Self::new(s);
        match re.error() {
            Some(err) => Err(err.clone()),
            None => Ok(re),
        }
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

// Entry points into the execution engine.
#[doc(hidden)]
pub mod backends {
    use super::exec;
    use super::Match;
    use crate::insn::CompiledRegex;
    pub use crate::parse::try_parse;

    /// An Executor using the classical backtracking algorithm.
    pub type BacktrackExecutor<'r, 't> = super::BacktrackExecutor<'r, 't>;

    /// An alias type to the default Executor.
    pub type DefaultExecutor<'r, 't> = BacktrackExecutor<'r, 't>;

    /// Find the leftmost match in `text` at or after `start`.
    #[inline]
    pub fn find_at(cr: &CompiledRegex, text: &[u8], start: usize) -> Option<Match> {
        DefaultExecutor::new(cr, text).match_at(start)
    }

    /// Searches `text`, returning an iterator over non-overlapping matches.
    pub fn find<'r, 't>(
        cr: &'r CompiledRegex,
        text: &'t [u8],
        start: usize,
    ) -> exec::Matches<'r, 't> {
        exec::Matches::new(DefaultExecutor::new(cr, text), start)
    }
}

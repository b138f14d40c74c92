#![allow(clippy::uninlined_format_args)]
#![allow(dead_code)]

/// Test that \p pattern fails to compile with default flags, with the given
/// error kind.
#[track_caller]
pub fn test_parse_fails(pattern: &str, kind: rxlite::ErrorKind) {
    test_parse_fails_flags(pattern, "", kind)
}

/// Test that \p pattern fails to compile with flags.
#[track_caller]
pub fn test_parse_fails_flags(pattern: &str, flags: &str, kind: rxlite::ErrorKind) {
    let re = rxlite::RegExp::with_flags(pattern, flags);
    assert_eq!(
        re.error_kind(),
        Some(kind),
        "Pattern should not have compiled: {}",
        pattern
    );
}

pub trait StringTestHelpers {
    /// "Fluent" style helper for testing that a String is equal to a str.
    fn test_eq(&self, s: &str);
}

impl StringTestHelpers for String {
    fn test_eq(&self, rhs: &str) {
        assert_eq!(self.as_str(), rhs)
    }
}

pub trait VecTestHelpers {
    /// "Fluent" style helper for testing that a Vec<&str> is equal to a
    /// Vec<&str>.
    fn test_eq(&self, rhs: Vec<&str>);
}

impl VecTestHelpers for Vec<&str> {
    fn test_eq(&self, rhs: Vec<&str>) {
        assert_eq!(*self, rhs)
    }
}

/// A compiled regex which remembers a TestConfig.
#[derive(Debug, Clone)]
pub struct TestCompiledRegex {
    re: rxlite::RegExp,
    tc: TestConfig,
}

impl TestCompiledRegex {
    /// Access the underlying RegExp.
    pub fn regexp(&self) -> &rxlite::RegExp {
        &self.re
    }

    /// Search for self in \p input, returning a list of all non-overlapping
    /// matches from \p start.
    #[track_caller]
    pub fn matches(&self, input: &str, start: usize) -> Vec<rxlite::Match> {
        match self.tc.entry {
            Entry::Str => {
                let mut result = Vec::new();
                let mut pos = Some(start);
                while let Some(p) = pos {
                    let Some(m) = self.re.match_at(input, p) else {
                        break;
                    };
                    pos = if !m.is_empty() {
                        Some(m.end())
                    } else if m.end() < input.len() {
                        Some(m.end() + 1)
                    } else {
                        None
                    };
                    result.push(m);
                }
                result
            }
            Entry::Iter => self.re.find_from_bytes(input.as_bytes(), start).collect(),
        }
    }

    /// Search for self in \p input, returning the first Match, or None if
    /// none.
    pub fn find(&self, input: &str) -> Option<rxlite::Match> {
        match self.tc.entry {
            Entry::Str => self.re.match_at(input, 0),
            Entry::Iter => self.re.find_iter(input).next(),
        }
    }

    /// Match against a string, returning the matched text.
    #[track_caller]
    pub fn match1f(&self, input: &str) -> String {
        match self.find(input) {
            Some(m) => input[m.range()].to_string(),
            None => panic!("Failed to match {}", input),
        }
    }

    /// Match against a string, returning the range of the first match.
    #[track_caller]
    pub fn match1r(&self, input: &str) -> rxlite::Range {
        match self.find(input) {
            Some(m) => m.range(),
            None => panic!("Failed to match {}", input),
        }
    }

    /// Test that matching against \p input fails.
    #[track_caller]
    pub fn test_fails(&self, input: &str) {
        assert!(self.find(input).is_none(), "Should not have matched")
    }

    /// Test that matching against \p input succeeds.
    #[track_caller]
    pub fn test_succeeds(&self, input: &str) {
        assert!(self.find(input).is_some(), "Should have matched")
    }

    /// Return a list of all non-overlapping total match ranges from a given
    /// start.
    pub fn match_all_from(&self, input: &str, start: usize) -> Vec<rxlite::Range> {
        self.matches(input, start)
            .into_iter()
            .map(move |m| m.range())
            .collect()
    }

    /// Return a list of all non-overlapping matches.
    pub fn match_all<'b>(&self, input: &'b str) -> Vec<&'b str> {
        self.matches(input, 0)
            .into_iter()
            .map(move |m| &input[m.range()])
            .collect()
    }
}

/// Which entry point matches are found through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Entry {
    /// Repeated calls to match_at.
    Str,

    /// The find_from_bytes iterator.
    Iter,
}

/// Description of how to test a regex.
#[derive(Debug, Copy, Clone)]
pub struct TestConfig {
    // Whether to use the start-position prefilter.
    optimize: bool,

    // How to drive the matcher.
    entry: Entry,
}

impl TestConfig {
    /// Compile a pattern to a regex, with default flags.
    #[track_caller]
    pub fn compile(&self, pattern: &str) -> TestCompiledRegex {
        self.compilef(pattern, "")
    }

    /// Compile a pattern to a regex, with given flags.
    #[track_caller]
    pub fn compilef(&self, pattern: &str, flags_str: &str) -> TestCompiledRegex {
        let mut flags = rxlite::Flags::from(flags_str);
        flags.no_opt = !self.optimize;

        let re = rxlite::RegExp::with_flags(pattern, flags);
        assert!(
            re.is_valid(),
            "Failed to compile! flags: {} pattern: {}, error: {}",
            flags_str,
            pattern,
            re.error().map(|e| e.to_string()).unwrap_or_default()
        );
        TestCompiledRegex { re, tc: *self }
    }

    /// Test that \p pattern and \p flags successfully compiles, and matches
    /// \p input.
    #[track_caller]
    pub fn test_match_succeeds(&self, pattern: &str, flags_str: &str, input: &str) {
        let cr = self.compilef(pattern, flags_str);
        cr.test_succeeds(input)
    }

    /// Test that \p pattern and \p flags successfully compiles, and does not
    /// match \p input.
    #[track_caller]
    pub fn test_match_fails(&self, pattern: &str, flags_str: &str, input: &str) {
        let cr = self.compilef(pattern, flags_str);
        cr.test_fails(input)
    }
}

/// Invoke \p F with each test config, in turn.
pub fn test_with_configs<F>(func: F)
where
    F: Fn(TestConfig),
{
    // Note we wish to be able to determine the TestConfig from the line number.
    func(TestConfig {
        optimize: false,
        entry: Entry::Str,
    });
    func(TestConfig {
        optimize: true,
        entry: Entry::Str,
    });
    func(TestConfig {
        optimize: false,
        entry: Entry::Iter,
    });
    func(TestConfig {
        optimize: true,
        entry: Entry::Iter,
    });
}

//! Translation of wildcard (glob) patterns to regex patterns.

/// Translate a wildcard pattern into an anchored regex pattern.
///
/// `*` matches any run of bytes and `?` any single byte. A bracketed class
/// with a closing `]` passes through, with any `\` in it escaped; every
/// other regex metacharacter that would be special is escaped.
///
/// ```rust
/// assert_eq!(rxlite::wc2rx("*.cpp"), "^.*\\.cpp$");
/// ```
pub fn wc2rx(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len() + 2);
    result.push('^');
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        rest = &rest[c.len_utf8()..];
        match c {
            '*' => result.push_str(".*"),
            '?' => result.push('.'),
            '.' | '+' | '\\' | '^' | '$' => {
                result.push('\\');
                result.push(c);
            }
            '[' => match rest.find(']') {
                Some(close) => {
                    // A backslash is an ordinary glob character, even in a class.
                    result.push('[');
                    result.push_str(&rest[..close].replace('\\', "\\\\"));
                    result.push(']');
                    rest = &rest[close + 1..];
                }
                None => result.push_str("\\["),
            },
            c => result.push(c),
        }
    }
    result.push('$');
    result
}

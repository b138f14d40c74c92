/*!

# rxlite - a small byte-oriented regular expression and wildcard engine

This crate compiles a compact regular expression dialect into a fixed-width
instruction stream and matches it with classical backtracking. Patterns and
subjects are treated as sequences of bytes; every reported position is a byte
offset.

# Example: find a match

```rust
use rxlite::RegExp;
let re = RegExp::new("[0-9]+");
let m = re.find("pi = 3.1416", 0).unwrap();
assert_eq!(m.range(), 5..6);
```

# Example: wildcard matching

Wildcard (glob) patterns are translated to an anchored regex before compiling:

```rust
use rxlite::{wc2rx, RegExp};
assert_eq!(wc2rx("*.cpp"), "^.*\\.cpp$");
let re = RegExp::with_flags("*.cpp", "w");
assert!(re.find("main.cpp", 0).is_some());
assert!(re.find("main.cpp.orig", 0).is_none());
```

# Example: counting and replacing

`count` finds overlapping occurrences; `replace_all` substitutes each match
in turn:

```rust
use rxlite::RegExp;
assert_eq!(RegExp::new("a[nm]a").count("banana and panama"), 4);
assert_eq!(RegExp::new("a+").replace_all("caaat sat", "o"), "cot sot");
```

# Supported Syntax

| Syntax | Meaning |
|---|---|
| `c` | the byte `c` |
| `.` | any byte |
| `^` | start of text, only as the first byte of the pattern |
| `$` | end of text, only as the last byte of the pattern |
| `[...]`, `[^...]` | a byte class, with ranges like `a-z` |
| `*`, `+`, `?` | zero or more, one or more, zero or one of the previous atom |
| `\<`, `\>` | start of word, end of word |
| `\s` | whitespace: tab, newline, vertical tab, form feed, carriage return, space |
| `\b \f \n \r \t` | control characters |
| `\xHH`, `\NNN` | a byte in hex or octal |

Any other escaped byte stands for itself. Quantifiers are greedy and there is
no alternation, grouping or capturing.

# Errors

A [`RegExp`] stores its compilation error instead of returning it; matching
against an invalid RegExp always reports no match.

```rust
use rxlite::{ErrorKind, RegExp};
assert_eq!(RegExp::new("").error_kind(), Some(ErrorKind::Null));
assert_eq!(RegExp::new("^*").error_kind(), Some(ErrorKind::Syntax));
assert_eq!(RegExp::new(&"x".repeat(2000)).error_kind(), Some(ErrorKind::Overflow));
```

# Case folding

Case-insensitive matching folds ASCII letters only:

```rust
use rxlite::RegExp;
let re = RegExp::with_flags("ABC", "i");
assert!(re.find("xabcx", 0).is_some());
```

# Architecture

The parser emits tagged instructions into an emitter, which accounts for
their size in 16-bit words and computes a start predicate used to skip ahead
to plausible match positions. The backtracking executor loops over
instructions and recurses only at closures.

*/

#![warn(clippy::all)]
#![allow(clippy::upper_case_acronyms, clippy::match_like_matches_macro)]
// Clippy's manual_range_contains suggestion produces worse codegen.
#![allow(clippy::manual_range_contains)]

pub use crate::api::*;
pub use crate::bytesearch::ByteBitmap;
pub use crate::parse::{Error, ErrorKind};
pub use crate::wildcard::wc2rx;

mod api;
mod bytesearch;
mod charclasses;
mod classicalbacktrack;
mod emit;
mod exec;
pub mod insn;
mod matchers;
mod parse;
mod startpredicate;
mod wildcard;

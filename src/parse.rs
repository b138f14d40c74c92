//! Parser from regex patterns to bytecode

use crate::api;
use crate::bytesearch::ByteBitmap;
use crate::charclasses;
use crate::emit::Emitter;
use crate::insn::{ClosureKind, CompiledRegex, Insn};
use std::fmt;

/// The category of a compilation error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The pattern was empty.
    Null,

    /// The pattern was malformed: an unterminated bracket, or a quantifier
    /// with nothing it may repeat.
    Syntax,

    /// The compiled pattern would exceed the instruction capacity.
    Overflow,
}

/// Represents an error encountered during regex compilation.
/// The text contains a human-readable error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub text: String,
}

impl Error {
    pub(crate) fn null() -> Self {
        Error {
            kind: ErrorKind::Null,
            text: "Empty pattern".to_string(),
        }
    }

    pub(crate) fn syntax<S: ToString>(text: S) -> Self {
        Error {
            kind: ErrorKind::Syntax,
            text: text.to_string(),
        }
    }

    pub(crate) fn overflow() -> Self {
        Error {
            kind: ErrorKind::Overflow,
            text: "Pattern too long".to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::error::Error for Error {}

/// Represents the state used to parse a regex.
struct Parser<'a> {
    /// The pattern bytes.
    input: &'a [u8],

    /// Offset of the next unconsumed byte.
    pos: usize,

    /// Flags used.
    flags: api::Flags,

    /// Where instructions go.
    emitter: Emitter,
}

impl<'a> Parser<'a> {
    /// Peek at the next byte.
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// \return the next byte.
    fn next(&mut self) -> Option<u8> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// If our contents begin with the byte c, consume it from our contents
    /// and return true. Otherwise return false.
    fn try_consume(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Emit a literal byte, folded if we are case-insensitive.
    fn emit_char(&mut self, c: u8) -> Result<(), Error> {
        let c = if self.flags.icase {
            c.to_ascii_lowercase()
        } else {
            c
        };
        self.emitter.emit_insn(Insn::Char(c))
    }

    fn try_parse(mut self) -> Result<CompiledRegex, Error> {
        while let Some(c) = self.next() {
            match c {
                // Only an anchor at the very start; elsewhere a literal.
                b'^' if self.pos == 1 => self.emitter.emit_insn(Insn::StartOfLine)?,

                // Only an anchor at the very end; elsewhere a literal.
                b'$' if self.pos == self.input.len() => {
                    self.emitter.emit_insn(Insn::EndOfLine)?
                }

                b'.' => self.emitter.emit_insn(Insn::Any)?,

                b'[' => {
                    let bitmap = self.consume_bracket()?;
                    self.emitter.emit_insn(Insn::Class(bitmap))?
                }

                b'*' => self.emitter.wrap_last(ClosureKind::Star, false)?,

                // One mandatory copy, then zero or more.
                b'+' => self.emitter.wrap_last(ClosureKind::Star, true)?,

                b'?' => self.emitter.wrap_last(ClosureKind::Optional, false)?,

                b'\\' => self.consume_atom_escape()?,

                c => self.emit_char(c)?,
            }
        }
        Ok(self.emitter.finish())
    }

    /// Parse a bracket, whose opening '[' has been consumed.
    fn consume_bracket(&mut self) -> Result<ByteBitmap, Error> {
        let invert = self.try_consume(b'^');
        let mut result = ByteBitmap::default();

        loop {
            let c = match self.next() {
                None => return Err(Error::syntax("Unbalanced bracket")),
                Some(b']') => break,
                Some(c) => c,
            };
            let first = if c == b'\\' {
                self.consume_character_escape()
            } else {
                c
            };

            // A '-' begins a range unless it is followed by ']' or the end.
            // For example, in [a-] the '-' is literal.
            let is_range = self.peek() == Some(b'-')
                && !matches!(self.input.get(self.pos + 1), None | Some(b']'));
            if is_range {
                self.next();
                let last = self.consume_bracket_atom();
                result.set_range(first, last);
            } else {
                result.set(first);
            }
        }

        if self.flags.icase {
            result.add_other_cases();
        }
        if invert {
            result.bitnot();
        }
        Ok(result)
    }

    /// Consume the end of a range inside a bracket.
    fn consume_bracket_atom(&mut self) -> u8 {
        match self.next() {
            Some(b'\\') => self.consume_character_escape(),
            Some(c) => c,
            None => unreachable!("Caller checked for a byte"),
        }
    }

    /// Decode a character escape, whose backslash has been consumed.
    /// Unrecognized escapes stand for the escaped byte itself.
    fn consume_character_escape(&mut self) -> u8 {
        let c = match self.next() {
            Some(c) => c,
            // A trailing backslash is itself.
            None => return b'\\',
        };
        match c {
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => 0x0A,
            b'r' => 0x0D,
            b't' => 0x09,
            b'x' => {
                let mut val: u32 = 0;
                let mut digits = 0;
                while digits < 2 {
                    match self.peek().and_then(|c| (c as char).to_digit(16)) {
                        Some(d) => {
                            self.pos += 1;
                            val = val * 16 + d;
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    b'x'
                } else {
                    val as u8
                }
            }
            b'0'..=b'7' => {
                let mut val = (c - b'0') as u32;
                let mut digits = 1;
                while digits < 3 {
                    match self.peek() {
                        Some(d @ b'0'..=b'7') => {
                            self.pos += 1;
                            val = val * 8 + (d - b'0') as u32;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                // \400 and above wrap to a byte.
                (val & 0xFF) as u8
            }
            c => c,
        }
    }

    /// Parse an escape outside a bracket, whose backslash has been consumed.
    fn consume_atom_escape(&mut self) -> Result<(), Error> {
        match self.peek() {
            Some(b's') => {
                self.pos += 1;
                self.emitter.emit_insn(Insn::Class(charclasses::whitespace()))
            }
            Some(b'<') => {
                self.pos += 1;
                self.emitter.emit_insn(Insn::StartOfWord)
            }
            Some(b'>') => {
                self.pos += 1;
                self.emitter.emit_insn(Insn::EndOfWord)
            }
            _ => {
                let c = self.consume_character_escape();
                self.emit_char(c)
            }
        }
    }
}

/// Try parsing a given pattern.
/// Return the resulting compiled regex, or an error.
/// Each call builds into its own buffer.
pub fn try_parse(pattern: &[u8], flags: api::Flags) -> Result<CompiledRegex, Error> {
    if pattern.is_empty() {
        return Err(Error::null());
    }
    let p = Parser {
        input: pattern,
        pos: 0,
        flags,
        emitter: Emitter::new(flags),
    };
    p.try_parse()
}

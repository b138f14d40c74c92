//! Bytecode instructions for a compiled regex

use crate::bytesearch::ByteBitmap;
use core::fmt;

/// Word encodings of the instructions.
/// Every instruction has a fixed length in 16-bit words; the capacity bound
/// and the bytecode dump are expressed in these words.
pub mod words {
    pub const END: u16 = 0x0000;
    pub const CHR: u16 = 0x4000;
    pub const BOL: u16 = 0x8001;
    pub const EOL: u16 = 0x8002;
    pub const BOW: u16 = 0x8003;
    pub const EOW: u16 = 0x8004;
    pub const ANY: u16 = 0x8005;
    pub const CCL: u16 = 0x8006;
    pub const CLO: u16 = 0x8007;
    pub const OPT: u16 = 0x8008;
}

/// The maximum number of words in a compiled regex, including the final END.
pub const MAX_INSN_WORDS: usize = 1024;

/// Number of table words following a class instruction.
pub const CLASS_TABLE_WORDS: usize = 16;

/// An instruction which always consumes exactly one byte.
/// Only these may be wrapped by a closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// Match a single byte. Stored folded if the regex is case-insensitive.
    Char(u8),

    /// Match any byte; emitted by '.'
    Any,

    /// Match a byte in the bitmap; emitted by brackets and \s.
    Class(ByteBitmap),
}

impl Atom {
    /// \return the number of words this atom occupies.
    pub fn word_len(&self) -> usize {
        match self {
            Atom::Char(_) | Atom::Any => 1,
            Atom::Class(_) => 1 + CLASS_TABLE_WORDS,
        }
    }

    fn encode(&self, out: &mut Vec<u16>) {
        match self {
            &Atom::Char(c) => out.push(words::CHR | c as u16),
            Atom::Any => out.push(words::ANY),
            Atom::Class(bitmap) => {
                out.push(words::CCL);
                out.extend_from_slice(bitmap.words());
            }
        }
    }
}

/// The kind of repetition a closure performs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClosureKind {
    /// Zero or more; emitted by '*' and as the tail of '+'.
    Star,

    /// Zero or one; emitted by '?'.
    Optional,
}

impl ClosureKind {
    /// The most iterations the closure may take.
    #[inline(always)]
    pub fn max_iters(self) -> usize {
        match self {
            ClosureKind::Star => usize::MAX,
            ClosureKind::Optional => 1,
        }
    }
}

/// The list of bytecode instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insn {
    /// The match was successful. Always the last instruction.
    Goal,

    /// Match a single byte.
    Char(u8),

    /// Match any byte.
    Any,

    /// Match a byte in the bitmap.
    Class(ByteBitmap),

    /// Match the start of the input; emitted by a leading '^'.
    StartOfLine,

    /// Match the end of the input; emitted by a trailing '$'.
    EndOfLine,

    /// Match the start of a word; emitted by '\<'.
    StartOfWord,

    /// Match the end of a word; emitted by '\>'.
    EndOfWord,

    /// Greedily repeat a single atom, backtracking one byte at a time.
    Closure { kind: ClosureKind, atom: Atom },
}

impl Insn {
    /// \return the instruction as an atom, if it is one.
    pub fn as_atom(&self) -> Option<Atom> {
        match self {
            &Insn::Char(c) => Some(Atom::Char(c)),
            Insn::Any => Some(Atom::Any),
            Insn::Class(bitmap) => Some(Atom::Class(*bitmap)),
            _ => None,
        }
    }

    /// \return the number of words this instruction occupies.
    pub fn word_len(&self) -> usize {
        match self {
            Insn::Goal
            | Insn::Char(_)
            | Insn::Any
            | Insn::StartOfLine
            | Insn::EndOfLine
            | Insn::StartOfWord
            | Insn::EndOfWord => 1,
            Insn::Class(_) => 1 + CLASS_TABLE_WORDS,
            // The closure word, the atom, and the END closing it.
            Insn::Closure { atom, .. } => 2 + atom.word_len(),
        }
    }

    /// Append the word encoding of this instruction.
    pub fn encode(&self, out: &mut Vec<u16>) {
        match self {
            Insn::Goal => out.push(words::END),
            &Insn::Char(c) => Atom::Char(c).encode(out),
            Insn::Any => Atom::Any.encode(out),
            Insn::Class(bitmap) => Atom::Class(*bitmap).encode(out),
            Insn::StartOfLine => out.push(words::BOL),
            Insn::EndOfLine => out.push(words::EOL),
            Insn::StartOfWord => out.push(words::BOW),
            Insn::EndOfWord => out.push(words::EOW),
            Insn::Closure { kind, atom } => {
                out.push(match kind {
                    ClosureKind::Star => words::CLO,
                    ClosureKind::Optional => words::OPT,
                });
                atom.encode(out);
                out.push(words::END);
            }
        }
    }
}

/// The peeled prefix start predicate.
/// This is a fast way of locating the first potential match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPredicate {
    /// May match at an arbitrary position.
    Arbitrary,

    /// Look for the first instance of a byte.
    Byte(u8),

    /// Look for the first instance of either case of a letter.
    ByteICase(u8, u8),

    /// Look for the first byte in a set.
    ByteSet(ByteBitmap),

    /// The regex is anchored to the start of the string.
    /// This avoids string searching entirely and only tries matching at the
    /// requested start.
    StartAnchored,
}

#[derive(Clone, PartialEq, Eq)]
pub struct CompiledRegex {
    // Sequence of instructions, ending with Goal.
    pub insns: Box<[Insn]>,

    // Predicate to rapidly find the first potential match.
    pub start_pred: StartPredicate,

    // Whether Char comparisons fold case.
    pub icase: bool,

    // Total length of the instructions in words.
    pub word_count: usize,
}

impl CompiledRegex {
    /// \return the instructions encoded as 16-bit words, ending with END.
    pub fn encode(&self) -> Vec<u16> {
        let mut out = Vec::with_capacity(self.word_count);
        for insn in self.insns.iter() {
            insn.encode(&mut out);
        }
        debug_assert_eq!(out.len(), self.word_count, "Word count out of sync");
        out
    }
}

impl fmt::Debug for CompiledRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledRegex")
            .field("insns", &self.insns)
            .field("start_pred", &self.start_pred)
            .field("icase", &self.icase)
            .field("word_count", &self.word_count)
            .finish()
    }
}

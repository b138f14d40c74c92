//! Regex compiler back-end: collects instructions into a CompiledRegex

use crate::api::Flags;
use crate::insn::{Atom, ClosureKind, CompiledRegex, Insn, MAX_INSN_WORDS};
use crate::parse::Error;
use crate::startpredicate;

/// Type which wraps up the context needed to emit a CompiledRegex.
/// The instruction buffer is local to one compilation.
pub struct Emitter {
    insns: Vec<Insn>,

    // Number of words emitted so far.
    words: usize,

    flags: Flags,
}

impl Emitter {
    pub fn new(flags: Flags) -> Self {
        Emitter {
            insns: Vec::new(),
            words: 0,
            flags,
        }
    }

    /// Account for \p extra more words, leaving room for the final Goal.
    fn reserve(&mut self, extra: usize) -> Result<(), Error> {
        // One word is held back for the terminating END.
        if self.words + extra + 1 > MAX_INSN_WORDS {
            return Err(Error::overflow());
        }
        self.words += extra;
        Ok(())
    }

    /// Emit an instruction.
    pub fn emit_insn(&mut self, insn: Insn) -> Result<(), Error> {
        self.reserve(insn.word_len())?;
        self.insns.push(insn);
        Ok(())
    }

    /// Get the most recently emitted instruction.
    pub fn last_insn(&self) -> Option<&Insn> {
        self.insns.last()
    }

    /// Wrap the most recently emitted instruction, which must be an atom, in
    /// a closure. If \p keep_original is set the atom stays in place and the
    /// closure follows it; this is how '+' is expressed.
    pub fn wrap_last(&mut self, kind: ClosureKind, keep_original: bool) -> Result<(), Error> {
        let atom: Atom = match self.last_insn().and_then(Insn::as_atom) {
            Some(atom) => atom,
            None if self.insns.is_empty() => return Err(Error::syntax("Nothing to repeat")),
            None => return Err(Error::syntax("Quantifier not allowed here")),
        };
        let closure = Insn::Closure { kind, atom };
        if keep_original {
            self.emit_insn(closure)
        } else {
            // Only the closure word and its END are new.
            self.reserve(2)?;
            match self.insns.last_mut() {
                Some(last) => *last = closure,
                None => unreachable!("Checked for an atom above"),
            }
            Ok(())
        }
    }

    /// Terminate the instructions and produce the CompiledRegex.
    pub fn finish(mut self) -> CompiledRegex {
        debug_assert!(self.words < MAX_INSN_WORDS, "Goal word was not reserved");
        self.insns.push(Insn::Goal);
        self.words += 1;
        let insns = self.insns.into_boxed_slice();
        let start_pred = startpredicate::predicate_for_insns(&insns, self.flags);
        CompiledRegex {
            insns,
            start_pred,
            icase: self.flags.icase,
            word_count: self.words,
        }
    }
}

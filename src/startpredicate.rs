//! Compute a start predicate from the first instruction of a regex.

use crate::api::Flags;
use crate::insn::{Insn, StartPredicate};

/// \return the start predicate for a list of instructions.
/// Only the first instruction is consulted; anything it cannot describe is
/// Arbitrary. StartAnchored is produced even with no_opt.
pub fn predicate_for_insns(insns: &[Insn], flags: Flags) -> StartPredicate {
    match insns.first() {
        Some(Insn::StartOfLine) => StartPredicate::StartAnchored,
        _ if flags.no_opt => StartPredicate::Arbitrary,
        Some(&Insn::Char(c)) => {
            if flags.icase && c.is_ascii_alphabetic() {
                StartPredicate::ByteICase(c.to_ascii_lowercase(), c.to_ascii_uppercase())
            } else {
                StartPredicate::Byte(c)
            }
        }
        Some(Insn::Class(bitmap)) => StartPredicate::ByteSet(*bitmap),
        _ => StartPredicate::Arbitrary,
    }
}

use crate::charclasses;
use crate::insn::Atom;

/// Case-fold a byte. Only ASCII letters fold.
#[inline(always)]
pub fn fold(c: u8) -> u8 {
    c.to_ascii_lowercase()
}

/// \return whether these two bytes fold to the same value.
#[inline(always)]
pub fn fold_equals(c1: u8, c2: u8) -> bool {
    c1 == c2 || fold(c1) == fold(c2)
}

/// \return whether the literal \p c matches the byte \p b.
#[inline(always)]
pub fn char_matches(c: u8, b: u8, icase: bool) -> bool {
    if icase {
        fold_equals(c, b)
    } else {
        c == b
    }
}

/// \return whether \p atom consumes the byte \p b.
/// Classes already contain both cases if compiled case-insensitively.
#[inline(always)]
pub fn atom_matches(atom: &Atom, b: u8, icase: bool) -> bool {
    match atom {
        &Atom::Char(c) => char_matches(c, b, icase),
        Atom::Any => true,
        Atom::Class(bitmap) => bitmap.contains(b),
    }
}

/// \return whether a word starts at \p pos: the byte there is a word byte,
/// and there is no word byte before it.
pub fn is_start_of_word(text: &[u8], pos: usize) -> bool {
    let curr_wordchar = text
        .get(pos)
        .is_some_and(|&b| charclasses::is_word_byte(b));
    let prev_wordchar = pos > 0 && charclasses::is_word_byte(text[pos - 1]);
    curr_wordchar && !prev_wordchar
}

/// \return whether \p pos satisfies '\>': the byte there is not a word byte
/// (the end of the text counts as one), and either we are at the start of
/// the text or the byte before is a word byte.
pub fn is_end_of_word(text: &[u8], pos: usize) -> bool {
    let curr_wordchar = text
        .get(pos)
        .is_some_and(|&b| charclasses::is_word_byte(b));
    let prev_ok = pos == 0 || charclasses::is_word_byte(text[pos - 1]);
    !curr_wordchar && prev_ok
}

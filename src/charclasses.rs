use crate::bytesearch::ByteBitmap;

// Character classes like \s.

/// The bytes matched by `\s`: tab, newline, vertical tab, form feed,
/// carriage return and space.
pub const WHITESPACE: [u8; 6] = [0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x20];

/// \return the bitmap for `\s`.
pub fn whitespace() -> ByteBitmap {
    ByteBitmap::new(&WHITESPACE)
}

/// \return whether \p b is a word byte: ASCII alphanumeric or underscore.
/// Bytes outside ASCII are never word bytes.
#[inline(always)]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_members() {
        let ws = whitespace();
        for b in 0..=255u8 {
            assert_eq!(ws.contains(b), WHITESPACE.contains(&b), "byte {}", b);
        }
    }

    #[test]
    fn word_bytes() {
        assert!(is_word_byte(b'a'));
        assert!(is_word_byte(b'Z'));
        assert!(is_word_byte(b'7'));
        assert!(is_word_byte(b'_'));
        assert!(!is_word_byte(b' '));
        assert!(!is_word_byte(b'-'));
        assert!(!is_word_byte(0xE9));
        assert!(!is_word_byte(0));
    }
}

use core::fmt;
extern crate memchr;

/// Facilities for searching bytes.
pub trait ByteSearcher {
    /// Search for ourselves in a slice of bytes.
    /// The length of the slice is unspecified and may be 0.
    /// \return the next index of ourselves in the slice, or None.
    fn find_in(&self, rhs: &[u8]) -> Option<usize>;
}

/// A single literal byte.
#[derive(Debug, Copy, Clone)]
pub struct SingleByte(pub u8);

impl ByteSearcher for SingleByte {
    #[inline(always)]
    fn find_in(&self, rhs: &[u8]) -> Option<usize> {
        memchr::memchr(self.0, rhs)
    }
}

/// Either of two bytes, typically the two cases of one letter.
#[derive(Debug, Copy, Clone)]
pub struct BytePair(pub u8, pub u8);

impl ByteSearcher for BytePair {
    #[inline(always)]
    fn find_in(&self, rhs: &[u8]) -> Option<usize> {
        memchr::memchr2(self.0, self.1, rhs)
    }
}

/// A trivial ByteSearcher corresponding to the empty string.
#[derive(Debug, Copy, Clone)]
pub struct EmptyString {}

impl ByteSearcher for EmptyString {
    #[inline(always)]
    fn find_in(&self, _bytes: &[u8]) -> Option<usize> {
        Some(0)
    }
}

/// A bitmap covering all bytes.
/// Bit `val & 0xF` of word `val >> 4` is set when `val` is a member; this is
/// also the layout of the 16 table words following a class instruction.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(align(4))]
pub struct ByteBitmap([u16; 16]);

impl ByteBitmap {
    /// Construct from a sequence of bytes.
    pub fn new(bytes: &[u8]) -> ByteBitmap {
        let mut bb = ByteBitmap::default();
        for &b in bytes {
            bb.set(b)
        }
        bb
    }

    /// \return whether this bitmap contains a given byte val.
    #[inline(always)]
    pub fn contains(&self, val: u8) -> bool {
        let byte = val >> 4;
        let bit = val & 0xF;
        (self.0[byte as usize] & (1 << bit)) != 0
    }

    /// Set a bit in this bitmap.
    #[inline(always)]
    pub fn set(&mut self, val: u8) {
        let byte = val >> 4;
        let bit = val & 0xF;
        self.0[byte as usize] |= 1 << bit;
    }

    /// Set every byte in the inclusive range. A reversed range sets nothing.
    pub fn set_range(&mut self, first: u8, last: u8) {
        for val in first..=last {
            self.set(val)
        }
    }

    /// Invert our bits, in place.
    pub fn bitnot(&mut self) -> &mut Self {
        for val in self.0.iter_mut() {
            *val = !*val;
        }
        self
    }

    /// For every ASCII letter present, add its other case.
    pub fn add_other_cases(&mut self) -> &mut Self {
        for val in b'a'..=b'z' {
            let upper = val.to_ascii_uppercase();
            if self.contains(val) || self.contains(upper) {
                self.set(val);
                self.set(upper);
            }
        }
        self
    }

    /// Count number of set bits.
    pub fn count_bits(&self) -> u32 {
        self.0.iter().map(|v| v.count_ones()).sum()
    }

    /// The raw table words.
    pub fn words(&self) -> &[u16; 16] {
        &self.0
    }

    /// \return all set bytes, as a vec.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_vec(&self) -> Vec<u8> {
        (0..=255).filter(|b| self.contains(*b)).collect()
    }
}

impl ByteSearcher for ByteBitmap {
    #[inline(always)]
    fn find_in(&self, bytes: &[u8]) -> Option<usize> {
        bytes.iter().position(|&b| self.contains(b))
    }
}

/// Write \p b as itself when printable, else as a hex escape.
fn write_byte(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    if b.is_ascii_graphic() {
        write!(f, "{}", b as char)
    } else {
        write!(f, "\\x{:02x}", b)
    }
}

impl fmt::Debug for ByteBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteBitmap[")?;
        let members = self.to_vec();
        // Runs of three or more bytes print as a range.
        for run in members.chunk_by(|a, b| b - a == 1) {
            match run {
                [first, .., last] if run.len() > 2 => {
                    write_byte(f, *first)?;
                    f.write_str("-")?;
                    write_byte(f, *last)?;
                }
                _ => {
                    for &b in run {
                        write_byte(f, b)?;
                    }
                }
            }
        }
        f.write_str("]")
    }
}

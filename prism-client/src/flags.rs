//! Table-driven decoding of TL `flags:#` words into named boolean sets.
//!
//! Each flag struct declares a static table of `(bit, setter)` pairs; one
//! decoder walks the table.  Bits that appear in no table are ignored, and a
//! table entry outside `0..32` simply never fires.

/// One entry of a flag table: the bit index and the setter for its field.
pub type FlagBit<F> = (u32, fn(&mut F));

/// A set of named booleans packed into a 32-bit TL flags word.
pub trait FlagSet: Default + Sized + 'static {
    /// Bit → field mapping.
    const TABLE: &'static [FlagBit<Self>];

    /// Decode `word` against [`Self::TABLE`].
    fn from_bits(word: i32) -> Self {
        decode(word, Self::TABLE)
    }
}

/// Decode `word` against an arbitrary table.
///
/// Every bit is tested on its own, so the result does not depend on table
/// order or on which other bits are set.
pub fn decode<F: Default>(word: i32, table: &[FlagBit<F>]) -> F {
    let word = word as u32;
    let mut flags = F::default();
    for &(bit, set) in table {
        if is_set(word, bit) {
            set(&mut flags);
        }
    }
    flags
}

/// `true` if `bit` is set in `word`; `false` for any `bit >= 32`.
pub fn is_set(word: u32, bit: u32) -> bool {
    word.checked_shr(bit).is_some_and(|w| w & 1 == 1)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug, PartialEq)]
    struct Probe {
        low:  bool,
        high: bool,
    }

    const PROBE: &[FlagBit<Probe>] = &[
        (0,  |f: &mut Probe| f.low = true),
        (31, |f: &mut Probe| f.high = true),
        (40, |f: &mut Probe| f.low = true),
    ];

    #[test]
    fn zero_word_is_all_false() {
        assert_eq!(decode(0, PROBE), Probe::default());
    }

    #[test]
    fn sign_bit_is_decoded() {
        assert_eq!(decode(i32::MIN, PROBE), Probe { low: false, high: true });
    }

    #[test]
    fn out_of_range_table_bit_never_fires() {
        assert!(!is_set(u32::MAX, 32));
        assert!(!is_set(u32::MAX, 40));
        assert_eq!(decode(-1, PROBE), Probe { low: true, high: true });
    }

    #[test]
    fn unknown_bits_are_ignored() {
        assert_eq!(decode(0b1110, PROBE), Probe::default());
    }
}

//! The extended code-point domain the rule engine operates over.
//!
//! A [`Symbol`] is wider than a Unicode scalar value: the scanner feeds the
//! pipeline raw bytes, later phases substitute *packed* UTF-8 sequences
//! (all bytes of one character folded into a single `u32`, e.g. `é` becomes
//! `0xC3A9`), and a handful of out-of-band sentinel values drive phase
//! transitions.
//!
//! # Sentinels
//!
//! - [`RAW_CHAR`] carries one character of a raw-string body through later
//!   phases. `0xFF` never occurs as a standalone byte of well-formed UTF-8,
//!   so no structural rule can confuse it with source text.
//! - [`START_OF_FILE`] sits at the top of the complement domain (inclusive),
//!   so `any_char()` accepts it — the pp-token phase has an explicit ignore
//!   rule for it.
//! - [`COMMENT_BEGIN`] and [`END_OF_FILE`] sit *above* [`MAX_CODE`] and are
//!   therefore only matched by rules that name them explicitly.

use smallvec::SmallVec;

/// One input symbol of the tokenizer pipeline.
pub type Symbol = u32;

/// Smallest ordinary symbol.
pub const MIN_CODE: Symbol = 0;

/// Largest symbol covered by [`Chset`](crate::Chset) complement.
///
/// Equal to [`START_OF_FILE`]: the start-of-file sentinel is inside the
/// complement domain, the comment-begin and end-of-file sentinels are not.
pub const MAX_CODE: Symbol = 0xFFFF_FFFD;

/// Placeholder symbol for one replayed raw-string body character.
pub const RAW_CHAR: Symbol = 0xFF;

/// Injected once before the first real input byte.
pub const START_OF_FILE: Symbol = 0xFFFF_FFFD;

/// Synthesized by the splice phase when it recognizes `/*`.
pub const COMMENT_BEGIN: Symbol = 0xFFFF_FFFE;

/// Injected by the caller after the last real input byte.
pub const END_OF_FILE: Symbol = 0xFFFF_FFFF;

/// Encode a Unicode code point as a packed UTF-8 symbol.
///
/// The UTF-8 encoding of `cp` is folded big-endian into one `u32`:
/// `pack_utf8(0xE9)` is `0xC3A9`, `pack_utf8(0x41)` is `0x41`.
pub fn pack_utf8(cp: u32) -> Symbol {
    if cp >= 0x1_0000 {
        ((0xF0 + (cp >> 18)) << 24)
            | ((0x80 + ((cp >> 12) & 0x3F)) << 16)
            | ((0x80 + ((cp >> 6) & 0x3F)) << 8)
            | (0x80 + (cp & 0x3F))
    } else if cp >= 0x0800 {
        ((0xE0 + (cp >> 12)) << 16) | ((0x80 + ((cp >> 6) & 0x3F)) << 8) | (0x80 + (cp & 0x3F))
    } else if cp >= 0x0080 {
        ((0xC0 + (cp >> 6)) << 8) | (0x80 + (cp & 0x3F))
    } else {
        cp
    }
}

/// The bytes of a symbol, most significant non-zero byte first.
///
/// For packed UTF-8 symbols this recovers the original byte sequence; for
/// plain ASCII symbols it is the single byte itself.
pub fn symbol_bytes(sym: Symbol) -> SmallVec<[u8; 4]> {
    let mut out = SmallVec::new();
    if sym & 0xFF00_0000 != 0 {
        out.push((sym >> 24) as u8);
    }
    if sym & 0xFF_0000 != 0 {
        out.push((sym >> 16) as u8);
    }
    if sym & 0xFF00 != 0 {
        out.push((sym >> 8) as u8);
    }
    out.push(sym as u8);
    out
}

/// UTF-8 encoded length of a code point (1 to 4).
fn utf8_len(cp: u32) -> u32 {
    if cp >= 0x1_0000 {
        4
    } else if cp >= 0x0800 {
        3
    } else if cp >= 0x0080 {
        2
    } else {
        1
    }
}

/// Convert inclusive code-point ranges to packed-UTF-8 symbol ranges.
///
/// A code-point range is contiguous in packed space only while the encoded
/// length stays constant, so ranges straddling an encoding-length boundary
/// are split at 0x80, 0x800 and 0x10000 before packing. Used to translate
/// the Annex E identifier tables into the domain the automata run over.
pub fn pack_ranges(ranges: &[(u32, u32)]) -> Vec<(Symbol, Symbol)> {
    const BOUNDS: [(u32, u32); 4] = [(0, 0x7F), (0x80, 0x7FF), (0x800, 0xFFFF), (0x1_0000, 0x10_FFFF)];
    let mut out = Vec::new();
    for &(lo, hi) in ranges {
        if lo > hi {
            continue;
        }
        for &(blo, bhi) in &BOUNDS {
            let lo = lo.max(blo);
            let hi = hi.min(bhi);
            if lo <= hi {
                debug_assert_eq!(utf8_len(lo), utf8_len(hi));
                out.push((pack_utf8(lo), pack_utf8(hi)));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_packs_to_itself() {
        assert_eq!(pack_utf8(0x41), 0x41);
        assert_eq!(pack_utf8(0x7F), 0x7F);
    }

    #[test]
    fn two_byte_pack() {
        // U+00E9 é = 0xC3 0xA9
        assert_eq!(pack_utf8(0xE9), 0xC3A9);
    }

    #[test]
    fn three_byte_pack() {
        // U+20AC € = 0xE2 0x82 0xAC
        assert_eq!(pack_utf8(0x20AC), 0x00E2_82AC);
    }

    #[test]
    fn four_byte_pack() {
        // U+1F600 = 0xF0 0x9F 0x98 0x80
        assert_eq!(pack_utf8(0x1F600), 0xF09F_9880);
    }

    #[test]
    fn symbol_bytes_recovers_utf8() {
        for cp in [0x41_u32, 0xE9, 0x20AC, 0x1F600] {
            let ch = char::from_u32(cp).expect("valid code point");
            let mut buf = [0_u8; 4];
            let encoded = ch.encode_utf8(&mut buf).as_bytes();
            assert_eq!(symbol_bytes(pack_utf8(cp)).as_slice(), encoded);
        }
    }

    #[test]
    fn pack_ranges_splits_on_length_boundary() {
        // 0x7E..0x81 straddles the 1-byte/2-byte boundary.
        let packed = pack_ranges(&[(0x7E, 0x81)]);
        assert_eq!(
            packed,
            vec![(0x7E, 0x7F), (pack_utf8(0x80), pack_utf8(0x81))]
        );
    }

    #[test]
    fn pack_ranges_drops_inverted() {
        assert!(pack_ranges(&[(10, 5)]).is_empty());
    }
}

//! Character classes and fixed token inventories shared by the phases.
//!
//! The code point ranges come from C++11 Annex E: `ANNEX_E1_ALLOWED` is
//! the set of extended characters permitted in identifiers, and
//! `ANNEX_E2_DISALLOWED_INITIALLY` the subset (combining characters) that
//! may not start one. Both are stored as code points and packed into the
//! scanner's UTF-8 symbol encoding on use.

use cpplex_regex::rule::{any_char, chset, sym};
use cpplex_regex::symbol::{pack_ranges, COMMENT_BEGIN};
use cpplex_regex::{Chset, Rule};

/// Code point ranges allowed in identifiers (C++11 Annex E.1).
pub(crate) const ANNEX_E1_ALLOWED: &[(u32, u32)] = &[
    (0xA8, 0xA8),
    (0xAA, 0xAA),
    (0xAD, 0xAD),
    (0xAF, 0xAF),
    (0xB2, 0xB5),
    (0xB7, 0xBA),
    (0xBC, 0xBE),
    (0xC0, 0xD6),
    (0xD8, 0xF6),
    (0xF8, 0xFF),
    (0x100, 0x167F),
    (0x1681, 0x180D),
    (0x180F, 0x1FFF),
    (0x200B, 0x200D),
    (0x202A, 0x202E),
    (0x203F, 0x2040),
    (0x2054, 0x2054),
    (0x2060, 0x206F),
    (0x2070, 0x218F),
    (0x2460, 0x24FF),
    (0x2776, 0x2793),
    (0x2C00, 0x2DFF),
    (0x2E80, 0x2FFF),
    (0x3004, 0x3007),
    (0x3021, 0x302F),
    (0x3031, 0x303F),
    (0x3040, 0xD7FF),
    (0xF900, 0xFD3D),
    (0xFD40, 0xFDCF),
    (0xFDF0, 0xFE44),
    (0xFE47, 0xFFFD),
    (0x10000, 0x1FFFD),
    (0x20000, 0x2FFFD),
    (0x30000, 0x3FFFD),
    (0x40000, 0x4FFFD),
    (0x50000, 0x5FFFD),
    (0x60000, 0x6FFFD),
    (0x70000, 0x7FFFD),
    (0x80000, 0x8FFFD),
    (0x90000, 0x9FFFD),
    (0xA0000, 0xAFFFD),
    (0xB0000, 0xBFFFD),
    (0xC0000, 0xCFFFD),
    (0xD0000, 0xDFFFD),
    (0xE0000, 0xEFFFD),
];

/// Combining-character ranges that may not begin an identifier
/// (C++11 Annex E.2).
pub(crate) const ANNEX_E2_DISALLOWED_INITIALLY: &[(u32, u32)] = &[
    (0x300, 0x36F),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20FF),
    (0xFE20, 0xFE2F),
];

/// Every preprocessing-op-or-punc, including the alternative tokens.
/// Longest-match scanning makes the ordering here irrelevant.
pub(crate) const OPS: &[&str] = &[
    "{", "}", "[", "]", "#", "##", "(", ")", "<:", ":>", "<%", "%>", "%:", "%:%:", ";", ":", "...",
    "new", "delete", "?", "::", ".", ".*", "+", "-", "*", "/", "%", "^", "&", "|", "~", "!", "=",
    "<", ">", "+=", "-=", "*=", "/=", "%=", "^=", "&=", "|=", "<<", ">>", ">>=", "<<=", "==", "!=",
    "<=", ">=", "&&", "||", "++", "--", ",", "->*", "->", "and", "and_eq", "bitand", "bitor",
    "compl", "not", "not_eq", "or", "or_eq", "xor", "xor_eq",
];

/// Opening sequences of string literals: a bare quote or any
/// encoding-prefix/raw combination ending in one.
pub(crate) const OPEN_QUOTES: &[&str] = &[
    "\"", "R\"", "u8\"", "u8R\"", "u\"", "uR\"", "U\"", "UR\"", "L\"", "LR\"",
];

/// Horizontal whitespace (everything but newline).
pub(crate) const WS_SPEC: &str = " \t\x0B\r\x08\x0C";

/// A rule matching the complement of `spec` within the symbol domain.
pub(crate) fn outside(spec: &str) -> Rule {
    Rule::Chset(!Chset::spec(spec))
}

/// Characters that may appear in an identifier after the first.
pub(crate) fn identifier_nondigit_chset() -> Chset {
    Chset::from_ranges(&pack_ranges(ANNEX_E1_ALLOWED)) | Chset::spec("a-zA-Z_")
}

/// Characters that may start an identifier.
pub(crate) fn first_identifier_chset() -> Chset {
    identifier_nondigit_chset() - Chset::from_ranges(&pack_ranges(ANNEX_E2_DISALLOWED_INITIALLY))
}

/// The full identifier rule.
pub(crate) fn identifier_rule() -> Rule {
    Rule::Chset(first_identifier_chset())
        >> (Rule::Chset(identifier_nondigit_chset()) | chset("0-9")).star()
}

/// Every character some token rule mentions explicitly. Its complement
/// (minus the raw-string placeholder) is the non-whitespace-character
/// catch-all.
pub(crate) fn used_chset() -> Chset {
    first_identifier_chset() | Chset::spec("-0-9~^{}[]#()<>:%;.?.+*/&|=!,\"' \n\t\x0B\r\x08\x0C")
}

/// `\uXXXX` hex quad.
pub(crate) fn hexquad_rule() -> Rule {
    chset("0-9a-fA-F") >> chset("0-9a-fA-F") >> chset("0-9a-fA-F") >> chset("0-9a-fA-F")
}

/// Body of a quoted string: anything but a backslash or closing quote,
/// escaped pairs, and the comment-begin marker (a `/*` inside a string
/// has already been collapsed to one symbol by the time it gets here and
/// must be carried through unchanged).
pub(crate) fn string_literal_content() -> Rule {
    (outside("\\\"") | (chset("\\") >> any_char()) | comment_begin()).star()
}

/// Body of a character literal, same shape with the other quote.
pub(crate) fn char_literal_content() -> Rule {
    (outside("\\'") | (chset("\\") >> any_char()) | comment_begin()).star()
}

pub(crate) fn comment_begin() -> Rule {
    sym(COMMENT_BEGIN)
}

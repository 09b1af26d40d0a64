//! Character-literal decoding.
//!
//! An unprefixed literal of one byte is a `char`; two to four bytes
//! form a multicharacter literal of type `int`, packed big-endian.
//! Prefixed literals must decode to exactly one code point: `u` is
//! `char16_t` (basic multilingual plane only), `U` is `char32_t`,
//! `L` is `wchar_t`. Decoded bytes must form valid UTF-8.

use memchr::memrchr;

use crate::escape::decode_escapes;
use crate::fundamental::FundamentalType;

/// Outcome of decoding one character literal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CharValue {
    Scalar(FundamentalType, Vec<u8>),
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharPrefix {
    None,
    U16,
    U32,
    Wide,
}

fn split_prefix(text: &[u8]) -> Option<(CharPrefix, &[u8])> {
    match text {
        [b'u', rest @ ..] if rest.first() == Some(&b'\'') => Some((CharPrefix::U16, rest)),
        [b'U', rest @ ..] if rest.first() == Some(&b'\'') => Some((CharPrefix::U32, rest)),
        [b'L', rest @ ..] if rest.first() == Some(&b'\'') => Some((CharPrefix::Wide, rest)),
        [b'\'', ..] => Some((CharPrefix::None, text)),
        _ => None,
    }
}

/// Splits a user-defined character literal into the quoted literal
/// and its ud-suffix, at the closing quote.
pub(crate) fn split_ud_char(text: &[u8]) -> Option<(&[u8], &[u8])> {
    let close = memrchr(b'\'', text)?;
    Some((&text[..=close], &text[close + 1..]))
}

/// Decodes a character literal (without any ud-suffix).
pub(crate) fn decode_char_literal(text: &[u8]) -> CharValue {
    let Some((prefix, quoted)) = split_prefix(text) else {
        return CharValue::Invalid;
    };
    if quoted.len() < 2 || quoted.first() != Some(&b'\'') || quoted.last() != Some(&b'\'') {
        return CharValue::Invalid;
    }
    let Some(decoded) = decode_escapes(&quoted[1..quoted.len() - 1]) else {
        return CharValue::Invalid;
    };
    let Ok(s) = std::str::from_utf8(&decoded) else {
        return CharValue::Invalid;
    };

    if prefix == CharPrefix::None {
        return match decoded.len() {
            1 => CharValue::Scalar(FundamentalType::Char, decoded),
            2..=4 => {
                let packed = decoded.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
                CharValue::Scalar(FundamentalType::Int, packed.to_ne_bytes().to_vec())
            }
            _ => CharValue::Invalid,
        };
    }

    let mut chars = s.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return CharValue::Invalid;
    };
    let cp = c as u32;
    match prefix {
        CharPrefix::U16 => match u16::try_from(cp) {
            Ok(unit) => CharValue::Scalar(FundamentalType::Char16T, unit.to_ne_bytes().to_vec()),
            Err(_) => CharValue::Invalid,
        },
        CharPrefix::U32 => CharValue::Scalar(FundamentalType::Char32T, cp.to_ne_bytes().to_vec()),
        CharPrefix::Wide => CharValue::Scalar(FundamentalType::WcharT, cp.to_ne_bytes().to_vec()),
        CharPrefix::None => CharValue::Invalid,
    }
}

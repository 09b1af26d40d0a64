//! Pp-number decoding: integer and floating literals.
//!
//! The numeric part is consumed left to right (radix prefix, digits,
//! fraction, exponent); whatever remains is the suffix. Integer
//! suffixes are classified with the rule engine, then the value is
//! laddered through the candidate types of the LP64 model until one
//! fits. A `_`-leading suffix makes the token a user-defined literal
//! and skips value decoding.

use std::sync::LazyLock;

use cpplex_regex::rule::strset;
use cpplex_regex::{matches_str, Rule};

use crate::fundamental::FundamentalType;

/// Outcome of decoding one pp-number token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NumberValue {
    /// A plain literal with its type and object representation.
    Scalar(FundamentalType, Vec<u8>),
    /// A user-defined literal, not value-decoded.
    UserDefined {
        digits: Vec<u8>,
        suffix: Vec<u8>,
        floating: bool,
    },
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntSuffix {
    None,
    U,
    L,
    Ll,
    Ul,
    Ull,
}

static INT_SUFFIX_RULES: LazyLock<Vec<(Rule, IntSuffix)>> = LazyLock::new(|| {
    vec![
        (strset(&["u", "U"]), IntSuffix::U),
        (strset(&["l", "L"]), IntSuffix::L),
        (strset(&["ll", "LL"]), IntSuffix::Ll),
        (
            strset(&["ul", "uL", "Ul", "UL", "lu", "lU", "Lu", "LU"]),
            IntSuffix::Ul,
        ),
        (
            strset(&["ull", "uLL", "Ull", "ULL", "llu", "llU", "LLu", "LLU"]),
            IntSuffix::Ull,
        ),
    ]
});

fn classify_int_suffix(suffix: &str) -> Option<IntSuffix> {
    if suffix.is_empty() {
        return Some(IntSuffix::None);
    }
    INT_SUFFIX_RULES
        .iter()
        .find(|(rule, _)| matches_str(rule, suffix))
        .map(|&(_, class)| class)
}

/// Candidate types, in order, for one suffix class. Decimal and
/// octal/hex literals ladder differently: only the latter may flip to
/// the unsigned sibling of a signed candidate.
fn ladder(suffix: IntSuffix, decimal: bool) -> &'static [FundamentalType] {
    use FundamentalType::{
        Int, LongInt, LongLongInt, UnsignedInt, UnsignedLongInt, UnsignedLongLongInt,
    };
    match (suffix, decimal) {
        (IntSuffix::None, true) => &[Int, LongInt, LongLongInt],
        (IntSuffix::None, false) => &[
            Int,
            UnsignedInt,
            LongInt,
            UnsignedLongInt,
            LongLongInt,
            UnsignedLongLongInt,
        ],
        (IntSuffix::U, _) => &[UnsignedInt, UnsignedLongInt, UnsignedLongLongInt],
        (IntSuffix::L, true) => &[LongInt, LongLongInt],
        (IntSuffix::L, false) => &[
            LongInt,
            UnsignedLongInt,
            LongLongInt,
            UnsignedLongLongInt,
        ],
        (IntSuffix::Ul, _) => &[UnsignedLongInt, UnsignedLongLongInt],
        (IntSuffix::Ll, true) => &[LongLongInt],
        (IntSuffix::Ll, false) => &[LongLongInt, UnsignedLongLongInt],
        (IntSuffix::Ull, _) => &[UnsignedLongLongInt],
    }
}

fn fits(value: u64, ty: FundamentalType) -> bool {
    match ty {
        FundamentalType::Int => value <= i32::MAX as u64,
        FundamentalType::UnsignedInt => value <= u64::from(u32::MAX),
        FundamentalType::LongInt | FundamentalType::LongLongInt => value <= i64::MAX as u64,
        _ => true,
    }
}

fn integer_value(value: u64, suffix: IntSuffix, decimal: bool) -> NumberValue {
    for &ty in ladder(suffix, decimal) {
        if !fits(value, ty) {
            continue;
        }
        let data = if ty.width() == 4 {
            match u32::try_from(value) {
                Ok(small) => small.to_ne_bytes().to_vec(),
                Err(_) => continue,
            }
        } else {
            value.to_ne_bytes().to_vec()
        };
        return NumberValue::Scalar(ty, data);
    }
    NumberValue::Invalid
}

/// Rejects digit strings whose value cannot fit in 64 bits, before
/// any accumulation. `u64::MAX` is 20 decimal digits, 16 hex digits,
/// 22 octal digits starting with `1`.
fn too_wide(digits: &str, radix: u32) -> bool {
    let significant = digits.trim_start_matches('0');
    match radix {
        10 => digits.len() > 20 || (digits.len() == 20 && digits > "18446744073709551615"),
        16 => significant.len() > 16,
        _ => {
            significant.len() > 22
                || (significant.len() == 22 && significant.as_bytes()[0] > b'1')
        }
    }
}

fn decode_integer(digits: &str, radix: u32, suffix: &str) -> NumberValue {
    let Some(class) = classify_int_suffix(suffix) else {
        return NumberValue::Invalid;
    };
    if too_wide(digits, radix) {
        return NumberValue::Invalid;
    }
    match u64::from_str_radix(digits, radix) {
        Ok(value) => integer_value(value, class, radix == 10),
        Err(_) => NumberValue::Invalid,
    }
}

fn decode_floating(numeric: &str, suffix: &str) -> NumberValue {
    match suffix {
        "" => match numeric.parse::<f64>() {
            Ok(v) => NumberValue::Scalar(FundamentalType::Double, v.to_ne_bytes().to_vec()),
            Err(_) => NumberValue::Invalid,
        },
        "f" | "F" => match numeric.parse::<f32>() {
            Ok(v) => NumberValue::Scalar(FundamentalType::Float, v.to_ne_bytes().to_vec()),
            Err(_) => NumberValue::Invalid,
        },
        "l" | "L" => match numeric.parse::<f64>() {
            Ok(v) => NumberValue::Scalar(FundamentalType::LongDouble, v.to_ne_bytes().to_vec()),
            Err(_) => NumberValue::Invalid,
        },
        _ => NumberValue::Invalid,
    }
}

/// Decodes a pp-number token into a typed literal.
pub(crate) fn decode_pp_number(text: &[u8]) -> NumberValue {
    let Ok(s) = std::str::from_utf8(text) else {
        return NumberValue::Invalid;
    };

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        let end = hex
            .bytes()
            .take_while(u8::is_ascii_hexdigit)
            .count();
        let (digits, suffix) = hex.split_at(end);
        if digits.is_empty() {
            return NumberValue::Invalid;
        }
        if suffix.starts_with('_') {
            return NumberValue::UserDefined {
                digits: s[..s.len() - suffix.len()].as_bytes().to_vec(),
                suffix: suffix.as_bytes().to_vec(),
                floating: false,
            };
        }
        return decode_integer(digits, 16, suffix);
    }

    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut is_float = false;
    if i < bytes.len() && bytes[i] == b'.' {
        is_float = true;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        if j < bytes.len() && bytes[j].is_ascii_digit() {
            is_float = true;
            i = j;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    let (numeric, suffix) = s.split_at(i);
    if numeric.is_empty() {
        return NumberValue::Invalid;
    }

    if suffix.starts_with('_') {
        return NumberValue::UserDefined {
            digits: numeric.as_bytes().to_vec(),
            suffix: suffix.as_bytes().to_vec(),
            floating: is_float,
        };
    }
    if is_float {
        return decode_floating(numeric, suffix);
    }
    if numeric.len() > 1 && numeric.starts_with('0') {
        if numeric.bytes().any(|b| b > b'7') {
            return NumberValue::Invalid;
        }
        return decode_integer(numeric, 8, suffix);
    }
    decode_integer(numeric, 10, suffix)
}

//! Escape-sequence decoding for character and string literal bodies.
//!
//! Escapes decode to Unicode code points, which are re-encoded as
//! UTF-8 here; the caller transcodes to the literal's element width.
//! Hex escapes take up to 7 hex digits, octal escapes up to 3 octal
//! digits (longest match). An escape naming a surrogate or an
//! out-of-range value poisons the whole literal. An unrecognized
//! escape decodes to nothing.

use crate::fundamental::FundamentalType;

fn simple_escape(b: u8) -> Option<u8> {
    match b {
        b'\'' => Some(0x27),
        b'"' => Some(0x22),
        b'?' => Some(0x3F),
        b'\\' => Some(0x5C),
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(0x0A),
        b'r' => Some(0x0D),
        b't' => Some(0x09),
        b'v' => Some(0x0B),
        _ => None,
    }
}

fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'f' => u32::from(b - b'a' + 10),
        _ => u32::from(b - b'A' + 10),
    }
}

fn push_code_point(out: &mut Vec<u8>, v: u32) -> Option<()> {
    let c = char::from_u32(v)?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    Some(())
}

/// Decodes every escape sequence in a literal body to UTF-8 bytes.
/// Bytes outside escapes pass through untouched. Returns `None` when
/// an escape names an unencodable code point.
pub(crate) fn decode_escapes(body: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        let b = body[i];
        if b != b'\\' {
            out.push(b);
            i += 1;
            continue;
        }
        i += 1;
        let &e = body.get(i)?;
        i += 1;
        match e {
            b'x' => {
                let start = i;
                while i < body.len() && body[i].is_ascii_hexdigit() {
                    i += 1;
                }
                let digits = &body[start..i];
                if digits.is_empty() || digits.len() > 7 {
                    return None;
                }
                let v = digits.iter().fold(0u32, |acc, &d| acc * 16 + hex_value(d));
                push_code_point(&mut out, v)?;
            }
            b'0'..=b'7' => {
                let mut v = u32::from(e - b'0');
                let mut taken = 1;
                while taken < 3 && i < body.len() && (b'0'..=b'7').contains(&body[i]) {
                    v = v * 8 + u32::from(body[i] - b'0');
                    i += 1;
                    taken += 1;
                }
                push_code_point(&mut out, v)?;
            }
            other => {
                if let Some(decoded) = simple_escape(other) {
                    out.push(decoded);
                }
            }
        }
    }
    Some(out)
}

/// Re-encodes decoded UTF-8 text as the code units of the element
/// type, native byte order.
pub(crate) fn encode_units(text: &str, ty: FundamentalType) -> Vec<u8> {
    match ty.width() {
        1 => text.as_bytes().to_vec(),
        2 => text.encode_utf16().flat_map(u16::to_ne_bytes).collect(),
        _ => text.chars().flat_map(|c| (c as u32).to_ne_bytes()).collect(),
    }
}

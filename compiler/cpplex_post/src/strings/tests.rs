use pretty_assertions::assert_eq;

use super::StringAccumulator;
use crate::fundamental::FundamentalType;
use crate::stream::{PostEvent, Recorder};

fn flush_one(acc: &mut StringAccumulator) -> PostEvent {
    let mut rec = Recorder::default();
    acc.flush(&mut rec);
    assert_eq!(rec.events.len(), 1);
    rec.events.remove(0)
}

#[test]
fn plain_string_gets_a_nul_terminator() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"\"abc\"");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::LiteralArray {
            source: "\"abc\"".to_owned(),
            n_elements: 4,
            ty: FundamentalType::Char,
            data: b"abc\0".to_vec(),
        }
    );
    assert!(!acc.pending());
}

#[test]
fn adjacent_pieces_concatenate_with_spaced_source() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"\"a\"");
    acc.add_string(b"\"b\"");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::LiteralArray {
            source: "\"a\" \"b\"".to_owned(),
            n_elements: 3,
            ty: FundamentalType::Char,
            data: b"ab\0".to_vec(),
        }
    );
}

#[test]
fn u8_prefix_agrees_with_unprefixed() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"u8\"a\"");
    acc.add_string(b"\"b\"");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::LiteralArray {
            source: "u8\"a\" \"b\"".to_owned(),
            n_elements: 3,
            ty: FundamentalType::Char,
            data: b"ab\0".to_vec(),
        }
    );
}

#[test]
fn conflicting_prefixes_are_invalid() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"u\"a\"");
    acc.add_string(b"U\"b\"");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::Invalid("u\"a\" U\"b\"".to_owned())
    );
}

#[test]
fn utf16_string_encodes_code_units() {
    let mut acc = StringAccumulator::default();
    acc.add_string("u\"ß\"".as_bytes());
    let mut data = Vec::new();
    data.extend_from_slice(&0x00DFu16.to_ne_bytes());
    data.extend_from_slice(&0u16.to_ne_bytes());
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::LiteralArray {
            source: "u\"ß\"".to_owned(),
            n_elements: 2,
            ty: FundamentalType::Char16T,
            data,
        }
    );
}

#[test]
fn utf32_string_encodes_code_points() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"U\"a\"");
    let mut data = Vec::new();
    data.extend_from_slice(&0x61u32.to_ne_bytes());
    data.extend_from_slice(&0u32.to_ne_bytes());
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::LiteralArray {
            source: "U\"a\"".to_owned(),
            n_elements: 2,
            ty: FundamentalType::Char32T,
            data,
        }
    );
}

#[test]
fn raw_bodies_bypass_escape_decoding() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"R\"(a\\n)\"");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::LiteralArray {
            source: "R\"(a\\n)\"".to_owned(),
            n_elements: 4,
            ty: FundamentalType::Char,
            data: b"a\\n\0".to_vec(),
        }
    );
}

#[test]
fn raw_delimiters_are_stripped() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"R\"xy()\")xy\"");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::LiteralArray {
            source: "R\"xy()\")xy\"".to_owned(),
            n_elements: 3,
            ty: FundamentalType::Char,
            data: b")\"\0".to_vec(),
        }
    );
}

#[test]
fn ud_suffix_rides_along() {
    let mut acc = StringAccumulator::default();
    acc.add_ud_string(b"\"mm\"_len");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::UdStringArray {
            source: "\"mm\"_len".to_owned(),
            suffix: "_len".to_owned(),
            n_elements: 3,
            ty: FundamentalType::Char,
            data: b"mm\0".to_vec(),
        }
    );
}

#[test]
fn ud_suffixes_must_agree() {
    let mut acc = StringAccumulator::default();
    acc.add_ud_string(b"\"a\"_x");
    acc.add_ud_string(b"\"b\"_y");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::Invalid("\"a\"_x \"b\"_y".to_owned())
    );
}

#[test]
fn non_underscore_suffix_is_invalid() {
    let mut acc = StringAccumulator::default();
    acc.add_ud_string(b"\"a\"x");
    assert_eq!(flush_one(&mut acc), PostEvent::Invalid("\"a\"x".to_owned()));
}

#[test]
fn invalid_utf8_body_is_invalid() {
    let mut acc = StringAccumulator::default();
    acc.add_string(b"\"\xFF\"");
    assert_eq!(
        flush_one(&mut acc),
        PostEvent::Invalid("\"\u{FFFD}\"".to_owned())
    );
}

#[test]
fn flush_with_nothing_pending_emits_nothing() {
    let mut acc = StringAccumulator::default();
    let mut rec = Recorder::default();
    acc.flush(&mut rec);
    assert!(rec.events.is_empty());
}

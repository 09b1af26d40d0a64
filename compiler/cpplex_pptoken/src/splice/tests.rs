use pretty_assertions::assert_eq;

use cpplex_regex::symbol::{COMMENT_BEGIN, END_OF_FILE};
use cpplex_regex::Symbol;

use super::Splice;
use crate::error::LexError;
use crate::stream::SymbolSink;

fn feed(input: &[u8]) -> Result<Vec<(Symbol, Vec<u8>)>, LexError> {
    let mut phase = Splice::new(Vec::new());
    for &b in input {
        phase.push(u32::from(b), &[b])?;
    }
    phase.push(END_OF_FILE, &[])?;
    let mut out = phase.into_next();
    assert_eq!(out.pop(), Some((END_OF_FILE, Vec::new())));
    Ok(out)
}

fn chars(text: &[u8]) -> Vec<(Symbol, Vec<u8>)> {
    text.iter().map(|&b| (u32::from(b), vec![b])).collect()
}

#[test]
fn escaped_line_break_disappears() {
    assert_eq!(feed(b"a\\\nb"), Ok(chars(b"ab")));
}

#[test]
fn lone_backslash_passes_through() {
    assert_eq!(feed(b"a\\b"), Ok(chars(b"a\\b")));
}

#[test]
fn short_ucn_packs_to_one_symbol() {
    // U+00E9 encodes as C3 A9; the packed symbol is those bytes.
    assert_eq!(
        feed(b"\\u00E9"),
        Ok(vec![(0xC3A9, vec![0xC3, 0xA9])])
    );
}

#[test]
fn long_ucn_packs_to_one_symbol() {
    assert_eq!(
        feed(b"\\U0001F600"),
        Ok(vec![(0xF09F_9880, vec![0xF0, 0x9F, 0x98, 0x80])])
    );
}

#[test]
fn ascii_ucn_becomes_the_plain_character() {
    assert_eq!(feed(b"\\u0041"), Ok(chars(b"A")));
}

#[test]
fn surrogate_ucn_is_replayed_verbatim() {
    assert_eq!(feed(b"\\uD800"), Ok(chars(b"\\uD800")));
}

#[test]
fn incomplete_ucn_is_plain_text() {
    assert_eq!(feed(b"\\u12x"), Ok(chars(b"\\u12x")));
}

#[test]
fn utf8_sequence_packs_to_one_symbol() {
    assert_eq!(
        feed("é".as_bytes()),
        Ok(vec![(0xC3A9, vec![0xC3, 0xA9])])
    );
    assert_eq!(
        feed("€".as_bytes()),
        Ok(vec![(0x00E2_82AC, vec![0xE2, 0x82, 0xAC])])
    );
}

#[test]
fn stray_lead_byte_stays_plain() {
    assert_eq!(
        feed(&[0xC3, b'x']),
        Ok(vec![(0xC3, vec![0xC3]), (u32::from(b'x'), vec![b'x'])])
    );
}

#[test]
fn comment_open_collapses_to_marker() {
    assert_eq!(
        feed(b"a/*"),
        Ok(vec![
            (u32::from(b'a'), vec![b'a']),
            (COMMENT_BEGIN, b"/*".to_vec()),
        ])
    );
}

#[test]
fn comment_open_split_by_a_splice_stays_two_characters() {
    // Splicing and comment detection share one scan, so a backslash
    // between the slash and the star keeps them separate tokens.
    assert_eq!(feed(b"/\\\n*"), Ok(chars(b"/*")));
}

use pretty_assertions::assert_eq;

use cpplex_regex::rule::{chset, chseq, sym};
use cpplex_regex::symbol::END_OF_FILE;
use cpplex_regex::Rule;

use super::{PhaseChar, TokenizerMachine};
use crate::error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    A,
    B,
    C,
    Eof,
}

fn machine(rules: &[(Rule, Kind)]) -> TokenizerMachine<Kind> {
    TokenizerMachine::new(rules)
}

/// Feed `text` byte by byte, collecting `(kind, lexeme)` pairs.
fn feed(m: &mut TokenizerMachine<Kind>, text: &str) -> Result<Vec<(Kind, String)>, LexError> {
    let mut out = Vec::new();
    for b in text.bytes() {
        for lexeme in m.process(PhaseChar::new(u32::from(b), &[b]))? {
            out.push((
                lexeme.kind,
                String::from_utf8_lossy(&lexeme.bytes()).into_owned(),
            ));
        }
    }
    Ok(out)
}

fn feed_eof(m: &mut TokenizerMachine<Kind>) -> Result<Vec<(Kind, String)>, LexError> {
    let mut out = Vec::new();
    for lexeme in m.process(PhaseChar::new(END_OF_FILE, &[]))? {
        out.push((
            lexeme.kind,
            String::from_utf8_lossy(&lexeme.bytes()).into_owned(),
        ));
    }
    Ok(out)
}

#[test]
fn single_rule_tokenizes_runs() {
    let mut m = machine(&[
        (chset("a-z").plus(), Kind::A),
        (chset(" ").plus(), Kind::B),
        (sym(END_OF_FILE), Kind::Eof),
    ]);
    let mut got = feed(&mut m, "foo bar").unwrap();
    got.extend(feed_eof(&mut m).unwrap());
    assert_eq!(
        got,
        vec![
            (Kind::A, "foo".to_owned()),
            (Kind::B, " ".to_owned()),
            (Kind::A, "bar".to_owned()),
            (Kind::Eof, String::new()),
        ]
    );
}

#[test]
fn longest_match_wins() {
    let mut m = machine(&[(chseq("ab"), Kind::A), (chseq("a"), Kind::B)]);
    // "ab" beats "a" even though "a" accepted first.
    assert_eq!(feed(&mut m, "ab"), Ok(vec![(Kind::A, "ab".to_owned())]));
}

#[test]
fn falls_back_to_shorter_match_when_longer_dies() {
    let mut m = machine(&[
        (chseq("aba"), Kind::A),
        (chseq("a"), Kind::B),
        (chseq("bc"), Kind::C),
    ]);
    // "ab" kills "a"-the-token? No: once "aba" can no longer complete,
    // the recorded one-symbol candidate is emitted and "b" rejoins the
    // stream as the start of "bc".
    assert_eq!(
        feed(&mut m, "abc"),
        Ok(vec![(Kind::B, "a".to_owned()), (Kind::C, "bc".to_owned())])
    );
}

#[test]
fn tie_goes_to_earliest_declared_rule() {
    let mut m = machine(&[(chset("x"), Kind::A), (chset("x"), Kind::B)]);
    assert_eq!(feed(&mut m, "x"), Ok(vec![(Kind::A, "x".to_owned())]));
}

#[test]
fn scans_inside_a_longer_match_are_pruned() {
    let mut m = machine(&[(chseq("ab"), Kind::A), (chseq("b"), Kind::B)]);
    // The "b" inside "ab" never becomes a token of its own, but a "b"
    // after it does.
    assert_eq!(
        feed(&mut m, "abb"),
        Ok(vec![(Kind::A, "ab".to_owned()), (Kind::B, "b".to_owned())])
    );
}

#[test]
fn several_tokens_can_finish_on_one_symbol() {
    let mut m = machine(&[(chset("a").plus(), Kind::A), (sym(END_OF_FILE), Kind::Eof)]);
    let mut got = feed(&mut m, "aaa").unwrap();
    assert_eq!(got, vec![]);
    got.extend(feed_eof(&mut m).unwrap());
    assert_eq!(
        got,
        vec![(Kind::A, "aaa".to_owned()), (Kind::Eof, String::new())]
    );
}

#[test]
fn unmatchable_single_character_is_invalid() {
    let mut m = machine(&[(chset("a"), Kind::A)]);
    assert_eq!(
        feed(&mut m, "b"),
        Err(LexError::InvalidChar { text: "b".to_owned() })
    );
}

#[test]
fn dead_multi_character_prefix_is_incomplete() {
    let mut m = machine(&[(chseq("ab"), Kind::A)]);
    assert_eq!(
        feed(&mut m, "ax"),
        Err(LexError::IncompleteToken { text: "ax".to_owned() })
    );
}

#[test]
fn candidate_survives_while_longer_match_is_still_possible() {
    let mut m = machine(&[(chseq("abcd"), Kind::A), (chseq("a"), Kind::B)]);
    // Nothing is emitted while "abcd" is still reachable.
    assert_eq!(feed(&mut m, "abc"), Ok(vec![]));
    assert_eq!(feed(&mut m, "d"), Ok(vec![(Kind::A, "abcd".to_owned())]));
}

mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// A one-symbol catch-all rule makes every input tile exactly,
        /// with the longer rule winning wherever it fits.
        #[test]
        fn tokens_tile_the_input(input in "[ab]{0,32}") {
            let mut m = machine(&[
                (chseq("ab"), Kind::A),
                (chset("ab"), Kind::B),
                (sym(END_OF_FILE), Kind::Eof),
            ]);
            let mut got = feed(&mut m, &input).unwrap();
            got.extend(feed_eof(&mut m).unwrap());
            let (eof, toks) = got.split_last().unwrap();
            prop_assert_eq!(eof.0, Kind::Eof);
            let joined: String = toks.iter().map(|(_, s)| s.as_str()).collect();
            prop_assert_eq!(joined, input);
            for (kind, text) in toks {
                match kind {
                    Kind::A => prop_assert_eq!(text.as_str(), "ab"),
                    Kind::B => prop_assert!(text == "a" || text == "b"),
                    _ => prop_assert!(false, "unexpected kind {:?}", kind),
                }
            }
        }
    }
}

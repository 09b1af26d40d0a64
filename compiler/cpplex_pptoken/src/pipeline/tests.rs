use pretty_assertions::assert_eq;

use super::PpTokenizer;
use crate::error::LexError;
use crate::stream::{PpEvent, Recorder};

use PpEvent::{
    CharacterLiteral, Eof, HeaderName, Identifier, NewLine, NonWhitespaceChar, OpOrPunc, PpNumber,
    StringLiteral, UserDefinedCharacterLiteral, UserDefinedStringLiteral, Whitespace,
};

fn lex(src: &str) -> Result<Vec<PpEvent>, LexError> {
    PpTokenizer::tokenize(src.as_bytes(), Recorder::default()).map(|r| r.events)
}

fn ident(s: &str) -> PpEvent {
    Identifier(s.to_owned())
}

fn op(s: &str) -> PpEvent {
    OpOrPunc(s.to_owned())
}

#[test]
fn simple_declaration() {
    assert_eq!(
        lex("int x = 42;\n"),
        Ok(vec![
            ident("int"),
            Whitespace,
            ident("x"),
            Whitespace,
            op("="),
            Whitespace,
            PpNumber("42".to_owned()),
            op(";"),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(lex(""), Ok(vec![Eof]));
}

#[test]
fn missing_final_newline_is_supplied() {
    assert_eq!(lex("x"), Ok(vec![ident("x"), NewLine, Eof]));
}

#[test]
fn final_newline_is_not_doubled() {
    assert_eq!(lex("x\n"), Ok(vec![ident("x"), NewLine, Eof]));
    assert_eq!(lex("x\n\n"), Ok(vec![ident("x"), NewLine, NewLine, Eof]));
}

#[test]
fn trigraphs_feed_the_token_rules() {
    assert_eq!(
        lex("??=define X\n"),
        Ok(vec![
            op("#"),
            ident("define"),
            Whitespace,
            ident("X"),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn line_splice_joins_tokens() {
    assert_eq!(lex("ab\\\ncd\n"), Ok(vec![ident("abcd"), NewLine, Eof]));
}

#[test]
fn block_comment_is_one_whitespace() {
    assert_eq!(
        lex("a/* long\ncomment */b\n"),
        Ok(vec![ident("a"), Whitespace, ident("b"), NewLine, Eof])
    );
}

#[test]
fn line_comment_keeps_the_newline() {
    assert_eq!(
        lex("a // trailing\nb\n"),
        Ok(vec![
            ident("a"),
            Whitespace,
            NewLine,
            ident("b"),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn header_include_at_file_start() {
    assert_eq!(
        lex("#include <foo.h>\n"),
        Ok(vec![
            op("#"),
            ident("include"),
            Whitespace,
            HeaderName("<foo.h>".to_owned()),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn header_include_after_newline() {
    assert_eq!(
        lex("x\n#include \"a.h\"\n"),
        Ok(vec![
            ident("x"),
            NewLine,
            op("#"),
            ident("include"),
            Whitespace,
            HeaderName("\"a.h\"".to_owned()),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn include_not_at_line_start_is_ordinary_tokens() {
    assert_eq!(
        lex("x #include <y>\n"),
        Ok(vec![
            ident("x"),
            Whitespace,
            op("#"),
            ident("include"),
            Whitespace,
            op("<"),
            ident("y"),
            op(">"),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn digraph_bracket_sequences_split_per_standard() {
    assert_eq!(lex("<::>"), Ok(vec![op("<:"), op(":>"), NewLine, Eof]));
    assert_eq!(
        lex("<:::"),
        Ok(vec![op("<:"), op("::"), NewLine, Eof])
    );
    assert_eq!(
        lex("<::x"),
        Ok(vec![op("<"), op("::"), ident("x"), NewLine, Eof])
    );
    assert_eq!(lex("<:>"), Ok(vec![op("<:"), op(">"), NewLine, Eof]));
}

#[test]
fn maximal_munch_on_operators() {
    assert_eq!(
        lex("a+++++b\n"),
        Ok(vec![
            ident("a"),
            op("++"),
            op("++"),
            op("+"),
            ident("b"),
            NewLine,
            Eof,
        ])
    );
    assert_eq!(lex("%:%:"), Ok(vec![op("%:%:"), NewLine, Eof]));
}

#[test]
fn alternative_spelled_operators_lex_as_identifiers() {
    // `new` and `and` are in the op inventory too; the identifier rule
    // wins the tie and the keyword table downstream sorts it out.
    assert_eq!(lex("new\n"), Ok(vec![ident("new"), NewLine, Eof]));
    assert_eq!(
        lex("a and b\n"),
        Ok(vec![
            ident("a"),
            Whitespace,
            ident("and"),
            Whitespace,
            ident("b"),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn string_literals() {
    assert_eq!(
        lex("\"hi\"\n"),
        Ok(vec![StringLiteral("\"hi\"".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex("u8\"hi\"\n"),
        Ok(vec![StringLiteral("u8\"hi\"".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex("\"hi\"_s\n"),
        Ok(vec![
            UserDefinedStringLiteral("\"hi\"_s".to_owned()),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn character_literals() {
    assert_eq!(
        lex("'a'\n"),
        Ok(vec![CharacterLiteral("'a'".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex("U'\\n'\n"),
        Ok(vec![CharacterLiteral("U'\\n'".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex("'x'_deg\n"),
        Ok(vec![
            UserDefinedCharacterLiteral("'x'_deg".to_owned()),
            NewLine,
            Eof,
        ])
    );
    assert_eq!(
        lex("'\\''\n"),
        Ok(vec![CharacterLiteral("'\\''".to_owned()), NewLine, Eof])
    );
}

#[test]
fn raw_strings_disable_every_transformation() {
    // Trigraphs and escape sequences inside the body stay verbatim.
    assert_eq!(
        lex("R\"(a??=\\n)\"\n"),
        Ok(vec![
            StringLiteral("R\"(a??=\\n)\"".to_owned()),
            NewLine,
            Eof,
        ])
    );
    // A backslash-newline in the body is content, not a splice.
    assert_eq!(
        lex("R\"(a\\\nb)\"\n"),
        Ok(vec![
            StringLiteral("R\"(a\\\nb)\"".to_owned()),
            NewLine,
            Eof,
        ])
    );
    assert_eq!(
        lex("u8R\"x(quote \" inside)x\"\n"),
        Ok(vec![
            StringLiteral("u8R\"x(quote \" inside)x\"".to_owned()),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn identifier_ending_in_r_before_string_is_not_raw() {
    assert_eq!(
        lex("VAR\"x\"\n"),
        Ok(vec![
            ident("VAR"),
            StringLiteral("\"x\"".to_owned()),
            NewLine,
            Eof,
        ])
    );
}

#[test]
fn universal_character_names_join_identifiers() {
    assert_eq!(lex("\\u00E9x\n"), Ok(vec![ident("éx"), NewLine, Eof]));
    assert_eq!(lex("héllo\n"), Ok(vec![ident("héllo"), NewLine, Eof]));
}

#[test]
fn unclassifiable_character_is_reported_as_such() {
    assert_eq!(
        lex("@\n"),
        Ok(vec![NonWhitespaceChar("@".to_owned()), NewLine, Eof])
    );
}

#[test]
fn pp_numbers_swallow_exponents_and_suffixes() {
    assert_eq!(
        lex("1.5e-3\n"),
        Ok(vec![PpNumber("1.5e-3".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex("2147483648\n"),
        Ok(vec![PpNumber("2147483648".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex("0x1fULL\n"),
        Ok(vec![PpNumber("0x1fULL".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex(".5f\n"),
        Ok(vec![PpNumber(".5f".to_owned()), NewLine, Eof])
    );
}

#[test]
fn comment_markers_inside_literals_are_content() {
    assert_eq!(
        lex("\"a//b\"\n"),
        Ok(vec![StringLiteral("\"a//b\"".to_owned()), NewLine, Eof])
    );
    assert_eq!(
        lex("\"a/*b\"\n"),
        Ok(vec![StringLiteral("\"a/*b\"".to_owned()), NewLine, Eof])
    );
}

#[test]
fn unterminated_constructs_fail() {
    assert!(matches!(
        lex("/* never closed"),
        Err(LexError::IncompleteToken { .. })
    ));
    assert!(matches!(
        lex("R\"(open"),
        Err(LexError::IncompleteToken { .. })
    ));
    assert!(matches!(
        lex("\"open"),
        Err(LexError::IncompleteToken { .. })
    ));
}

//! Third stage: comments become a single space.
//!
//! String and character literals are matched here too, not to emit them
//! (the final phase does that) but to keep their bodies opaque: a `//`
//! or comment-begin marker inside a literal is content, not a comment.
//! Matched literals are replayed downstream character by character with
//! their symbols intact, so raw-string placeholders and packed extended
//! characters survive the trip.
//!
//! A multi-line comment closes at the first `*/`, including the
//! degenerate `/***/` shape where the opener's star run flows straight
//! into the closer.

use cpplex_regex::rule::{any_char, chseq, chset, sym};
use cpplex_regex::symbol::END_OF_FILE;
use cpplex_regex::Symbol;

use crate::error::LexError;
use crate::machine::{Lexeme, PhaseChar, TokenizerMachine};
use crate::stream::SymbolSink;
use crate::tables::{char_literal_content, comment_begin, outside, string_literal_content};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentToken {
    SingleLineComment,
    MultiLineComment,
    StringLiteral,
    CharacterLiteral,
    PlainCharacter,
}

pub(crate) struct CommentStrip<S> {
    machine: TokenizerMachine<CommentToken>,
    next: S,
}

impl<S: SymbolSink> CommentStrip<S> {
    pub fn new(next: S) -> CommentStrip<S> {
        let rules = [
            (
                CommentToken::SingleLineComment,
                chseq("//") >> (outside("\n") | comment_begin()).star(),
            ),
            (
                CommentToken::MultiLineComment,
                comment_begin()
                    >> (outside("*") | (chseq("*").plus() >> outside("*/"))).star()
                    >> chseq("*").plus()
                    >> chseq("/"),
            ),
            (
                CommentToken::StringLiteral,
                chseq("\"") >> string_literal_content() >> chseq("\""),
            ),
            (
                CommentToken::CharacterLiteral,
                chseq("'") >> char_literal_content() >> chseq("'"),
            ),
            (CommentToken::PlainCharacter, any_char() | sym(END_OF_FILE)),
        ];
        CommentStrip {
            machine: TokenizerMachine::new(&rules.map(|(kind, rule)| (rule, kind))),
            next,
        }
    }

    pub fn next_mut(&mut self) -> &mut S {
        &mut self.next
    }

    pub fn into_next(self) -> S {
        self.next
    }

    fn link(&mut self, lexeme: &Lexeme<CommentToken>) -> Result<(), LexError> {
        match lexeme.kind {
            CommentToken::SingleLineComment | CommentToken::MultiLineComment => {
                self.next.push(u32::from(b' '), b" ")
            }
            CommentToken::StringLiteral
            | CommentToken::CharacterLiteral
            | CommentToken::PlainCharacter => {
                for c in &lexeme.chars {
                    self.next.push(c.sym, &c.text)?;
                }
                Ok(())
            }
        }
    }
}

impl<S: SymbolSink> SymbolSink for CommentStrip<S> {
    fn push(&mut self, sym: Symbol, text: &[u8]) -> Result<(), LexError> {
        for lexeme in self.machine.process(PhaseChar::new(sym, text))? {
            self.link(&lexeme)?;
        }
        Ok(())
    }
}

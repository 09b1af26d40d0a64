//! Second stage: line splicing, universal-character-names, and UTF-8
//! sequence packing.
//!
//! After this phase every downstream symbol is one logical character:
//! a backslash-newline pair is gone, `\uXXXX` and `\UXXXXXXXX` are
//! condensed to the named code point, and a multi-byte UTF-8 sequence
//! travels as a single packed symbol whose value is its bytes in
//! big-endian order (`é` is the symbol `0xC3A9`). Packing the encoded
//! bytes rather than the code point keeps single-byte characters equal
//! to themselves and lets the Annex E identifier ranges be expressed as
//! plain symbol ranges.
//!
//! `/*` also collapses here, into the out-of-band comment-begin marker,
//! so the comment phase can treat the opener as a single symbol that no
//! string or character literal body ever contains by accident.

use cpplex_regex::rule::{any_char, chseq, chset, ranges, sym};
use cpplex_regex::symbol::{pack_utf8, COMMENT_BEGIN, END_OF_FILE};
use cpplex_regex::Symbol;

use crate::error::LexError;
use crate::machine::{Lexeme, PhaseChar, TokenizerMachine};
use crate::stream::SymbolSink;
use crate::tables::hexquad_rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpliceToken {
    EscapedLineBreak,
    UniversalCharacterTuple,
    Utf8Sequence,
    CommentStart,
    PlainCharacter,
}

pub(crate) struct Splice<S> {
    machine: TokenizerMachine<SpliceToken>,
    next: S,
}

impl<S: SymbolSink> Splice<S> {
    pub fn new(next: S) -> Splice<S> {
        let trail = || ranges(&[(0x80, 0xBF)]);
        let rules = [
            (SpliceToken::EscapedLineBreak, chseq("\\\n")),
            (
                SpliceToken::UniversalCharacterTuple,
                chset("\\")
                    >> ((chseq("u") >> hexquad_rule())
                        | (chseq("U") >> hexquad_rule() >> hexquad_rule())),
            ),
            (
                SpliceToken::Utf8Sequence,
                (ranges(&[(0xF0, 0xF7)]) >> trail() >> trail() >> trail())
                    | (ranges(&[(0xE0, 0xEF)]) >> trail() >> trail())
                    | (ranges(&[(0xC0, 0xDF)]) >> trail()),
            ),
            (SpliceToken::CommentStart, chseq("/*")),
            (SpliceToken::PlainCharacter, any_char() | sym(END_OF_FILE)),
        ];
        Splice {
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

    fn link(&mut self, lexeme: &Lexeme<SpliceToken>) -> Result<(), LexError> {
        match lexeme.kind {
            SpliceToken::EscapedLineBreak => Ok(()),
            SpliceToken::UniversalCharacterTuple => {
                let bytes = lexeme.bytes();
                let mut cp: u32 = 0;
                for &b in &bytes[2..] {
                    cp = (cp << 4) + u32::from(hex_value(b));
                }
                match char::from_u32(cp) {
                    Some(c) => {
                        let mut buf = [0u8; 4];
                        let encoded = c.encode_utf8(&mut buf).as_bytes();
                        self.next.push(pack_utf8(cp), encoded)
                    }
                    // Surrogates and out-of-range names are left for a
                    // later stage to reject in context.
                    None => self.replay(lexeme),
                }
            }
            SpliceToken::Utf8Sequence => {
                let mut packed: Symbol = 0;
                let bytes = lexeme.bytes();
                for &b in &bytes {
                    packed = (packed << 8) | u32::from(b);
                }
                self.next.push(packed, &bytes)
            }
            SpliceToken::CommentStart => self.next.push(COMMENT_BEGIN, b"/*"),
            SpliceToken::PlainCharacter => self.replay(lexeme),
        }
    }

    fn replay(&mut self, lexeme: &Lexeme<SpliceToken>) -> Result<(), LexError> {
        for c in &lexeme.chars {
            self.next.push(c.sym, &c.text)?;
        }
        Ok(())
    }
}

impl<S: SymbolSink> SymbolSink for Splice<S> {
    fn push(&mut self, sym: Symbol, text: &[u8]) -> Result<(), LexError> {
        for lexeme in self.machine.process(PhaseChar::new(sym, text))? {
            self.link(&lexeme)?;
        }
        Ok(())
    }
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests;

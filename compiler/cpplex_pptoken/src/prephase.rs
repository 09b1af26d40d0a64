//! Earliest transformation stage: trigraph replacement and raw-string
//! capture.
//!
//! Trigraphs are rewritten before anything else looks at the input, which
//! is exactly why raw strings must also be recognized here: the body of a
//! raw string reverts every transformation, so `??=` inside `R"(??=)"`
//! must reach the output untouched.
//!
//! Raw strings do not fit a finite rule (the close sequence repeats the
//! open delimiter), so recognition is split: the rule table only spots
//! the `R"` opener, then the phase switches to an explicit scanning mode
//! that consumes bytes until the matching `)delim"` comes around. The
//! captured body is replayed downstream as [`RAW_CHAR`] placeholder
//! symbols, one per byte. Later phases pass those through untouched —
//! no rule gives the placeholder any structural meaning — while the byte
//! each one carries keeps the literal's text intact.
//!
//! An `R"` directly preceded by an identifier tail (`MACRO"..."`) is not
//! a raw-string opener; a short lookback over the preceding characters
//! decides whether the `R` could begin an encoding prefix.

use std::collections::VecDeque;

use cpplex_regex::rule::{any_char, chseq, chset, sym};
use cpplex_regex::symbol::{END_OF_FILE, RAW_CHAR};
use cpplex_regex::Symbol;

use crate::error::LexError;
use crate::machine::{Lexeme, PhaseChar, TokenizerMachine};
use crate::stream::SymbolSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrephaseToken {
    Trigraph,
    RawStringOpen,
    PlainCharacter,
}

/// How many characters of lookback the raw-string gate needs: the two
/// characters of `R"` plus up to `u8` and one boundary character.
const LOOKBACK: usize = 5;

pub(crate) struct Prephase<S> {
    machine: TokenizerMachine<PrephaseToken>,
    /// Active raw-string scan, if the input is currently inside one.
    raw: Option<RawStringScan>,
    /// Recently pushed input symbols, newest last, for the raw gate.
    recent: VecDeque<Symbol>,
    next: S,
}

impl<S: SymbolSink> Prephase<S> {
    pub fn new(next: S) -> Prephase<S> {
        let rules = [
            (
                PrephaseToken::Trigraph,
                chseq("??") >> chset("=/'()!<>-"),
            ),
            (PrephaseToken::RawStringOpen, chseq("R\"")),
            (
                PrephaseToken::PlainCharacter,
                any_char() | sym(END_OF_FILE),
            ),
        ];
        Prephase {
            machine: TokenizerMachine::new(
                &rules.map(|(kind, rule)| (rule, kind)),
            ),
            raw: None,
            recent: VecDeque::with_capacity(LOOKBACK + 1),
            next,
        }
    }

    pub fn next_mut(&mut self) -> &mut S {
        &mut self.next
    }

    pub fn into_next(self) -> S {
        self.next
    }
}

impl<S: SymbolSink> SymbolSink for Prephase<S> {
    fn push(&mut self, sym: Symbol, text: &[u8]) -> Result<(), LexError> {
        if let Some(scan) = &mut self.raw {
            if sym == END_OF_FILE {
                let mut partial = b"R\"".to_vec();
                partial.extend_from_slice(&scan.text);
                return Err(LexError::incomplete(&partial));
            }
            let Some(&byte) = text.first() else {
                return Err(LexError::invalid(text));
            };
            if scan.push(byte)? {
                let scan = self.raw.take().unwrap_or_default();
                self.next.push(u32::from(b'R'), b"R")?;
                self.next.push(u32::from(b'"'), b"\"")?;
                for &b in &scan.text[..scan.text.len() - 1] {
                    self.next.push(RAW_CHAR, &[b])?;
                }
                self.next.push(u32::from(b'"'), b"\"")?;
            }
            return Ok(());
        }

        self.recent.push_back(sym);
        if self.recent.len() > LOOKBACK {
            self.recent.pop_front();
        }
        for lexeme in self.machine.process(PhaseChar::new(sym, text))? {
            self.link(&lexeme)?;
        }
        Ok(())
    }
}

impl<S: SymbolSink> Prephase<S> {
    fn link(&mut self, lexeme: &Lexeme<PrephaseToken>) -> Result<(), LexError> {
        match lexeme.kind {
            PrephaseToken::PlainCharacter => {
                for c in &lexeme.chars {
                    self.next.push(c.sym, &c.text)?;
                }
                Ok(())
            }
            PrephaseToken::Trigraph => {
                let last = lexeme.chars.last().and_then(|c| c.text.last().copied());
                let replacement = match last {
                    Some(b'=') => b'#',
                    Some(b'/') => b'\\',
                    Some(b'\'') => b'^',
                    Some(b'(') => b'[',
                    Some(b')') => b']',
                    Some(b'!') => b'|',
                    Some(b'<') => b'{',
                    Some(b'>') => b'}',
                    Some(b'-') => b'~',
                    _ => return Err(LexError::invalid(&lexeme.bytes())),
                };
                self.next.push(u32::from(replacement), &[replacement])
            }
            PrephaseToken::RawStringOpen => {
                if self.raw_open_allowed() {
                    self.raw = Some(RawStringScan::default());
                    Ok(())
                } else {
                    // Part of an ordinary token such as `MACRO"..."`;
                    // put both characters back as plain input.
                    self.next.push(u32::from(b'R'), b"R")?;
                    self.next.push(u32::from(b'"'), b"\"")
                }
            }
        }
    }

    /// Decide whether an `R"` just scanned opens a raw string. It does
    /// unless the `R` extends an identifier that is not one of the
    /// encoding prefixes `u`, `U`, `L`, `u8`.
    fn raw_open_allowed(&self) -> bool {
        let back = |i: usize| {
            self.recent
                .len()
                .checked_sub(i)
                .and_then(|j| self.recent.get(j))
                .and_then(|&s| u8::try_from(s).ok())
        };
        // The ring ends with `R` and `"`; the characters before them
        // decide.
        let (b1, b2, b3) = (back(3), back(4), back(5));
        let cont =
            |b: Option<u8>| b.is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80);
        match b1 {
            Some(b'u' | b'U' | b'L') => !cont(b2),
            Some(b'8') if b2 == Some(b'u') => !cont(b3),
            b if cont(b) => false,
            _ => true,
        }
    }
}

/// Byte scanner for the interior of a raw string literal, from just
/// after the opening quote to the closing quote inclusive.
#[derive(Debug, Default)]
struct RawStringScan {
    /// Everything consumed so far, closing quote included once done.
    text: Vec<u8>,
    delim: Vec<u8>,
    in_body: bool,
}

impl RawStringScan {
    /// Consume one byte; `Ok(true)` once the closing quote landed.
    fn push(&mut self, b: u8) -> Result<bool, LexError> {
        self.text.push(b);
        if !self.in_body {
            match b {
                b'(' => self.in_body = true,
                b')' | b'\\' | b' ' | b'\t' | b'\x0B' | b'\x0C' | b'\n' => {
                    return Err(LexError::invalid(&[b]));
                }
                _ if self.delim.len() == 16 => return Err(LexError::invalid(&[b])),
                _ => self.delim.push(b),
            }
            return Ok(false);
        }
        Ok(b == b'"' && self.closes())
    }

    /// The text ends with `)` delimiter `"`, past the opening sequence.
    fn closes(&self) -> bool {
        let n = self.text.len();
        let need = self.delim.len() + 2;
        n >= 2 * self.delim.len() + 3
            && self.text[n - need] == b')'
            && self.text[n - need + 1..n - 1] == self.delim[..]
    }
}

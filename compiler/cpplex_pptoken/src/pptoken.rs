//! Final stage: preprocessing tokens.
//!
//! Everything upstream has been normalized by now; this phase holds the
//! real token grammar and drives the [`PpTokenStream`] callbacks. A few
//! matches cover more than one output token and are decomposed as they
//! are emitted:
//!
//! * a header-include line becomes `#`, `include`, whitespace and a
//!   header-name token, since `<foo.h>` only scans as one token in that
//!   context;
//! * the `<::` family splits per the alternative-token rules, so
//!   `x<::y>` keeps its digraph `[` while `x< ::y` keeps its `<`;
//! * the start-of-file marker matches an ignore rule that emits nothing,
//!   but lets the header-include rule anchor at file start.
//!
//! Rule order settles equal-length ties: `new` is emitted as an
//! identifier even though it also appears in the op-or-punc inventory,
//! and the downstream keyword table decides what it means.

use cpplex_regex::rule::{chseq, chset, strset, sym};
use cpplex_regex::symbol::{END_OF_FILE, RAW_CHAR, START_OF_FILE};
use cpplex_regex::{Chset, Rule, Symbol};
use memchr::memchr2;

use crate::error::LexError;
use crate::machine::{Lexeme, PhaseChar, TokenizerMachine};
use crate::stream::{PpTokenStream, SymbolSink};
use crate::tables::{
    char_literal_content, identifier_rule, outside, string_literal_content, used_chset,
    OPEN_QUOTES, OPS, WS_SPEC,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PpToken {
    Ignore,
    HeaderInclude,
    PpNumber,
    Identifier,
    CharacterLiteral,
    StringLiteral,
    OpOrPunc,
    SpecialOpSeq,
    WhiteSpace,
    Newline,
    NonWhitespaceChar,
}

pub(crate) struct PpTokenPhase<S> {
    machine: TokenizerMachine<PpToken>,
    sink: S,
}

impl<S: PpTokenStream> PpTokenPhase<S> {
    pub fn new(sink: S) -> PpTokenPhase<S> {
        let ws = || Rule::Chset(Chset::spec(WS_SPEC));
        let rules = [
            (PpToken::Ignore, sym(START_OF_FILE)),
            (
                PpToken::HeaderInclude,
                (chset("\n") | sym(START_OF_FILE))
                    >> chseq("#include")
                    >> ws().star()
                    >> ((chseq("\"") >> outside("\"\n").star() >> chseq("\""))
                        | (chseq("<") >> outside(">\n").star() >> chseq(">"))),
            ),
            (
                PpToken::PpNumber,
                (chset("0-9") | (chseq(".") >> chset("0-9")))
                    >> (chset("a-zA-Z0-9._").star() >> (chset("eE") >> chset("-+")).star()).star(),
            ),
            (PpToken::Identifier, identifier_rule()),
            (
                PpToken::CharacterLiteral,
                ((chset("uUL") >> chseq("'")) | chseq("'"))
                    >> char_literal_content()
                    >> (chseq("'") | (chseq("'") >> identifier_rule())),
            ),
            (
                PpToken::StringLiteral,
                strset(OPEN_QUOTES)
                    >> string_literal_content()
                    >> (chseq("\"") | (chseq("\"") >> identifier_rule())),
            ),
            (PpToken::OpOrPunc, strset(OPS)),
            (PpToken::SpecialOpSeq, strset(&["<::>", "<::", "<:::"])),
            (PpToken::WhiteSpace, ws().plus()),
            (
                PpToken::Newline,
                chseq("\n") | sym(END_OF_FILE) | (chseq("\n") >> sym(END_OF_FILE)),
            ),
            (
                PpToken::NonWhitespaceChar,
                Rule::Chset(!used_chset() - Chset::of(RAW_CHAR)),
            ),
        ];
        PpTokenPhase {
            machine: TokenizerMachine::new(&rules.map(|(kind, rule)| (rule, kind))),
            sink,
        }
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, lexeme: &Lexeme<PpToken>) {
        let bytes = lexeme.bytes();
        match lexeme.kind {
            PpToken::Ignore => {}
            PpToken::PpNumber => self.sink.pp_number(&bytes),
            PpToken::Identifier => self.sink.identifier(&bytes),
            PpToken::WhiteSpace => self.sink.whitespace_sequence(),
            PpToken::Newline => self.sink.new_line(),
            PpToken::OpOrPunc => self.sink.preprocessing_op_or_punc(&bytes),
            PpToken::NonWhitespaceChar => self.sink.non_whitespace_char(&bytes),
            PpToken::CharacterLiteral => {
                if bytes.last() == Some(&b'\'') {
                    self.sink.character_literal(&bytes);
                } else {
                    self.sink.user_defined_character_literal(&bytes);
                }
            }
            PpToken::StringLiteral => {
                if bytes.last() == Some(&b'"') {
                    self.sink.string_literal(&bytes);
                } else {
                    self.sink.user_defined_string_literal(&bytes);
                }
            }
            PpToken::SpecialOpSeq => {
                let (first, second): (&[u8], &[u8]) = match bytes.as_slice() {
                    b"<::>" => (b"<:", b":>"),
                    b"<:::" => (b"<:", b"::"),
                    _ => (b"<", b"::"),
                };
                self.sink.preprocessing_op_or_punc(first);
                self.sink.preprocessing_op_or_punc(second);
            }
            PpToken::HeaderInclude => {
                if bytes.first() == Some(&b'\n') {
                    self.sink.new_line();
                }
                self.sink.preprocessing_op_or_punc(b"#");
                self.sink.identifier(b"include");
                self.sink.whitespace_sequence();
                if let Some(at) = memchr2(b'"', b'<', &bytes) {
                    self.sink.header_name(&bytes[at..]);
                }
            }
        }
    }
}

impl<S: PpTokenStream> SymbolSink for PpTokenPhase<S> {
    fn push(&mut self, sym: Symbol, text: &[u8]) -> Result<(), LexError> {
        for lexeme in self.machine.process(PhaseChar::new(sym, text))? {
            self.emit(&lexeme);
        }
        Ok(())
    }
}

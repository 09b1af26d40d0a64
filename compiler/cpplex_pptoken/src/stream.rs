//! Output vocabulary of the tokenizer.
//!
//! [`PpTokenStream`] is the event interface a consumer implements to
//! receive preprocessing tokens. Payloads are byte slices, not `&str`:
//! literal bodies can legally carry bytes that never formed valid UTF-8,
//! and deciding what to do about that belongs to the consumer.

use cpplex_regex::Symbol;

use crate::error::LexError;

/// Receiver of preprocessing tokens, one callback per token kind.
pub trait PpTokenStream {
    fn whitespace_sequence(&mut self);
    fn new_line(&mut self);
    fn header_name(&mut self, text: &[u8]);
    fn identifier(&mut self, text: &[u8]);
    fn pp_number(&mut self, text: &[u8]);
    fn character_literal(&mut self, text: &[u8]);
    fn user_defined_character_literal(&mut self, text: &[u8]);
    fn string_literal(&mut self, text: &[u8]);
    fn user_defined_string_literal(&mut self, text: &[u8]);
    fn preprocessing_op_or_punc(&mut self, text: &[u8]);
    fn non_whitespace_char(&mut self, text: &[u8]);
    fn eof(&mut self);
}

/// Internal seam between pipeline phases: each phase pushes decorated
/// characters into the next one.
pub(crate) trait SymbolSink {
    fn push(&mut self, sym: Symbol, text: &[u8]) -> Result<(), LexError>;
}

#[cfg(test)]
impl SymbolSink for Vec<(Symbol, Vec<u8>)> {
    fn push(&mut self, sym: Symbol, text: &[u8]) -> Result<(), LexError> {
        Vec::push(self, (sym, text.to_vec()));
        Ok(())
    }
}

/// A [`PpTokenStream`] that records every event, for tests and tooling.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Recorder {
    pub events: Vec<PpEvent>,
}

/// One recorded token event. Text payloads are lossily decoded for
/// readable assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PpEvent {
    Whitespace,
    NewLine,
    HeaderName(String),
    Identifier(String),
    PpNumber(String),
    CharacterLiteral(String),
    UserDefinedCharacterLiteral(String),
    StringLiteral(String),
    UserDefinedStringLiteral(String),
    OpOrPunc(String),
    NonWhitespaceChar(String),
    Eof,
}

fn lossy(text: &[u8]) -> String {
    String::from_utf8_lossy(text).into_owned()
}

impl PpTokenStream for Recorder {
    fn whitespace_sequence(&mut self) {
        self.events.push(PpEvent::Whitespace);
    }
    fn new_line(&mut self) {
        self.events.push(PpEvent::NewLine);
    }
    fn header_name(&mut self, text: &[u8]) {
        self.events.push(PpEvent::HeaderName(lossy(text)));
    }
    fn identifier(&mut self, text: &[u8]) {
        self.events.push(PpEvent::Identifier(lossy(text)));
    }
    fn pp_number(&mut self, text: &[u8]) {
        self.events.push(PpEvent::PpNumber(lossy(text)));
    }
    fn character_literal(&mut self, text: &[u8]) {
        self.events.push(PpEvent::CharacterLiteral(lossy(text)));
    }
    fn user_defined_character_literal(&mut self, text: &[u8]) {
        self.events
            .push(PpEvent::UserDefinedCharacterLiteral(lossy(text)));
    }
    fn string_literal(&mut self, text: &[u8]) {
        self.events.push(PpEvent::StringLiteral(lossy(text)));
    }
    fn user_defined_string_literal(&mut self, text: &[u8]) {
        self.events
            .push(PpEvent::UserDefinedStringLiteral(lossy(text)));
    }
    fn preprocessing_op_or_punc(&mut self, text: &[u8]) {
        self.events.push(PpEvent::OpOrPunc(lossy(text)));
    }
    fn non_whitespace_char(&mut self, text: &[u8]) {
        self.events.push(PpEvent::NonWhitespaceChar(lossy(text)));
    }
    fn eof(&mut self) {
        self.events.push(PpEvent::Eof);
    }
}

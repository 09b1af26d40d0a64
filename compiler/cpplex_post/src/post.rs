//! The post-tokenizer: classifies preprocessing tokens into keywords,
//! operators, identifiers and typed literals.
//!
//! Implemented as a [`PpTokenStream`], so it slots directly behind the
//! phase tokenizer. String literals are buffered for concatenation;
//! every other token kind first flushes any pending string run, then
//! emits exactly one [`PostTokenStream`] event.

use cpplex_pptoken::{LexError, PpTokenStream, PpTokenizer};
use tracing::trace;

use crate::char_lit::{decode_char_literal, split_ud_char, CharValue};
use crate::number::{decode_pp_number, NumberValue};
use crate::stream::PostTokenStream;
use crate::strings::StringAccumulator;
use crate::token::token_type;

/// Adapter from preprocessing tokens to classified tokens.
#[derive(Debug)]
pub struct PostTokenizer<S: PostTokenStream> {
    sink: S,
    strings: StringAccumulator,
}

impl<S: PostTokenStream> PostTokenizer<S> {
    pub fn new(sink: S) -> PostTokenizer<S> {
        PostTokenizer {
            sink,
            strings: StringAccumulator::default(),
        }
    }

    /// Runs the full pipeline over a buffer: phase tokenization, then
    /// token classification and literal decoding.
    pub fn tokenize(bytes: &[u8], sink: S) -> Result<S, LexError> {
        let post = PpTokenizer::tokenize(bytes, PostTokenizer::new(sink))?;
        Ok(post.into_sink())
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn invalid(&mut self, text: &[u8]) {
        trace!(text = %String::from_utf8_lossy(text), "invalid token");
        self.sink.invalid(text);
    }
}

impl<S: PostTokenStream> PpTokenStream for PostTokenizer<S> {
    // Whitespace carries no token and does not break a string run.
    fn whitespace_sequence(&mut self) {}

    fn new_line(&mut self) {}

    fn header_name(&mut self, text: &[u8]) {
        // Header names survive only unpreprocessed #include lines;
        // nothing downstream can consume one.
        self.strings.flush(&mut self.sink);
        self.invalid(text);
    }

    fn identifier(&mut self, text: &[u8]) {
        self.strings.flush(&mut self.sink);
        match token_type(text) {
            Some(tt) => self.sink.simple(text, tt),
            None => self.sink.identifier(text),
        }
    }

    fn pp_number(&mut self, text: &[u8]) {
        self.strings.flush(&mut self.sink);
        match decode_pp_number(text) {
            NumberValue::Scalar(ty, data) => self.sink.literal(text, ty, &data),
            NumberValue::UserDefined {
                digits,
                suffix,
                floating: true,
            } => self
                .sink
                .user_defined_literal_floating(text, &suffix, &digits),
            NumberValue::UserDefined {
                digits,
                suffix,
                floating: false,
            } => self
                .sink
                .user_defined_literal_integer(text, &suffix, &digits),
            NumberValue::Invalid => self.invalid(text),
        }
    }

    fn character_literal(&mut self, text: &[u8]) {
        self.strings.flush(&mut self.sink);
        match decode_char_literal(text) {
            CharValue::Scalar(ty, data) => self.sink.literal(text, ty, &data),
            CharValue::Invalid => self.invalid(text),
        }
    }

    fn user_defined_character_literal(&mut self, text: &[u8]) {
        self.strings.flush(&mut self.sink);
        let Some((literal, suffix)) = split_ud_char(text) else {
            self.invalid(text);
            return;
        };
        if !suffix.starts_with(b"_") {
            self.invalid(text);
            return;
        }
        match decode_char_literal(literal) {
            CharValue::Scalar(ty, data) => {
                self.sink
                    .user_defined_literal_character(text, suffix, ty, &data);
            }
            CharValue::Invalid => self.invalid(text),
        }
    }

    fn string_literal(&mut self, text: &[u8]) {
        self.strings.add_string(text);
    }

    fn user_defined_string_literal(&mut self, text: &[u8]) {
        self.strings.add_ud_string(text);
    }

    fn preprocessing_op_or_punc(&mut self, text: &[u8]) {
        self.strings.flush(&mut self.sink);
        match token_type(text) {
            Some(tt) => self.sink.simple(text, tt),
            None => self.invalid(text),
        }
    }

    fn non_whitespace_char(&mut self, text: &[u8]) {
        self.strings.flush(&mut self.sink);
        self.invalid(text);
    }

    fn eof(&mut self) {
        self.strings.flush(&mut self.sink);
        self.sink.eof();
    }
}

//! Output interface for the post-tokenizer.
//!
//! Each preprocessing token becomes exactly one event here (except
//! string literals, which concatenate; a run of adjacent string
//! literals becomes one array event). Literal data is the object
//! representation of the value, native byte order.

use crate::fundamental::FundamentalType;
use crate::token::TokenType;

/// Receiver for fully classified tokens.
pub trait PostTokenStream {
    /// A token that failed classification or decoding.
    fn invalid(&mut self, source: &[u8]);
    /// A keyword or operator.
    fn simple(&mut self, source: &[u8], token_type: TokenType);
    /// An identifier that is not a keyword.
    fn identifier(&mut self, source: &[u8]);
    /// A scalar literal: integer, floating, or character.
    fn literal(&mut self, source: &[u8], ty: FundamentalType, data: &[u8]);
    /// An array literal (string literal), `n_elements` includes the
    /// terminating NUL element.
    fn literal_array(&mut self, source: &[u8], n_elements: usize, ty: FundamentalType, data: &[u8]);
    /// A user-defined character literal.
    fn user_defined_literal_character(
        &mut self,
        source: &[u8],
        ud_suffix: &[u8],
        ty: FundamentalType,
        data: &[u8],
    );
    /// A user-defined string literal.
    fn user_defined_literal_string_array(
        &mut self,
        source: &[u8],
        ud_suffix: &[u8],
        n_elements: usize,
        ty: FundamentalType,
        data: &[u8],
    );
    /// A user-defined integer literal; `digits` is the literal with
    /// the ud-suffix removed.
    fn user_defined_literal_integer(&mut self, source: &[u8], ud_suffix: &[u8], digits: &[u8]);
    /// A user-defined floating literal; `digits` is the literal with
    /// the ud-suffix removed.
    fn user_defined_literal_floating(&mut self, source: &[u8], ud_suffix: &[u8], digits: &[u8]);
    /// End of input.
    fn eof(&mut self);
}

/// One recorded output event. See [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum PostEvent {
    Invalid(String),
    Simple(String, TokenType),
    Identifier(String),
    Literal {
        source: String,
        ty: FundamentalType,
        data: Vec<u8>,
    },
    LiteralArray {
        source: String,
        n_elements: usize,
        ty: FundamentalType,
        data: Vec<u8>,
    },
    UdCharacter {
        source: String,
        suffix: String,
        ty: FundamentalType,
        data: Vec<u8>,
    },
    UdStringArray {
        source: String,
        suffix: String,
        n_elements: usize,
        ty: FundamentalType,
        data: Vec<u8>,
    },
    UdInteger {
        source: String,
        suffix: String,
        digits: String,
    },
    UdFloating {
        source: String,
        suffix: String,
        digits: String,
    },
    Eof,
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// A [`PostTokenStream`] that stores every event, for tests and for
/// driving the tokenizer from a buffer.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<PostEvent>,
}

impl PostTokenStream for Recorder {
    fn invalid(&mut self, source: &[u8]) {
        self.events.push(PostEvent::Invalid(lossy(source)));
    }

    fn simple(&mut self, source: &[u8], token_type: TokenType) {
        self.events.push(PostEvent::Simple(lossy(source), token_type));
    }

    fn identifier(&mut self, source: &[u8]) {
        self.events.push(PostEvent::Identifier(lossy(source)));
    }

    fn literal(&mut self, source: &[u8], ty: FundamentalType, data: &[u8]) {
        self.events.push(PostEvent::Literal {
            source: lossy(source),
            ty,
            data: data.to_vec(),
        });
    }

    fn literal_array(&mut self, source: &[u8], n_elements: usize, ty: FundamentalType, data: &[u8]) {
        self.events.push(PostEvent::LiteralArray {
            source: lossy(source),
            n_elements,
            ty,
            data: data.to_vec(),
        });
    }

    fn user_defined_literal_character(
        &mut self,
        source: &[u8],
        ud_suffix: &[u8],
        ty: FundamentalType,
        data: &[u8],
    ) {
        self.events.push(PostEvent::UdCharacter {
            source: lossy(source),
            suffix: lossy(ud_suffix),
            ty,
            data: data.to_vec(),
        });
    }

    fn user_defined_literal_string_array(
        &mut self,
        source: &[u8],
        ud_suffix: &[u8],
        n_elements: usize,
        ty: FundamentalType,
        data: &[u8],
    ) {
        self.events.push(PostEvent::UdStringArray {
            source: lossy(source),
            suffix: lossy(ud_suffix),
            n_elements,
            ty,
            data: data.to_vec(),
        });
    }

    fn user_defined_literal_integer(&mut self, source: &[u8], ud_suffix: &[u8], digits: &[u8]) {
        self.events.push(PostEvent::UdInteger {
            source: lossy(source),
            suffix: lossy(ud_suffix),
            digits: lossy(digits),
        });
    }

    fn user_defined_literal_floating(&mut self, source: &[u8], ud_suffix: &[u8], digits: &[u8]) {
        self.events.push(PostEvent::UdFloating {
            source: lossy(source),
            suffix: lossy(ud_suffix),
            digits: lossy(digits),
        });
    }

    fn eof(&mut self) {
        self.events.push(PostEvent::Eof);
    }
}

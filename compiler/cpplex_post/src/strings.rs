//! String-literal concatenation and encoding.
//!
//! Adjacent string literals in the token stream form one array
//! literal. Pieces arrive one at a time and are held here until a
//! token that is not a string literal forces a flush (whitespace and
//! new-lines do not). Encoding prefixes must agree across pieces; an
//! unprefixed piece is compatible with everything, and a run with no
//! prefix at all defaults to plain `char`. Ud-suffixes must agree the
//! same way. Any conflict or undecodable piece turns the whole run
//! into one invalid token.

use memchr::{memchr, memrchr};

use crate::escape::{decode_escapes, encode_units};
use crate::fundamental::FundamentalType;
use crate::stream::PostTokenStream;

#[derive(Debug, Default)]
pub(crate) struct StringAccumulator {
    sources: Vec<Vec<u8>>,
    pieces: Vec<Vec<u8>>,
    ty: Option<FundamentalType>,
    ud_suffix: Option<Vec<u8>>,
    invalid: bool,
}

fn encoding_prefix(prefix: &[u8]) -> Option<Option<FundamentalType>> {
    match prefix {
        b"" => Some(None),
        b"u8" => Some(Some(FundamentalType::Char)),
        b"u" => Some(Some(FundamentalType::Char16T)),
        b"U" => Some(Some(FundamentalType::Char32T)),
        b"L" => Some(Some(FundamentalType::WcharT)),
        _ => None,
    }
}

impl StringAccumulator {
    pub(crate) fn pending(&self) -> bool {
        !self.sources.is_empty()
    }

    /// Adds one string-literal token.
    pub(crate) fn add_string(&mut self, text: &[u8]) {
        self.sources.push(text.to_vec());
        self.add_piece(text);
    }

    /// Adds one user-defined string-literal token; the ud-suffix
    /// follows the closing quote.
    pub(crate) fn add_ud_string(&mut self, text: &[u8]) {
        self.sources.push(text.to_vec());
        let Some(close) = memrchr(b'"', text) else {
            self.invalid = true;
            return;
        };
        let (literal, suffix) = (&text[..=close], &text[close + 1..]);
        if !suffix.starts_with(b"_") {
            self.invalid = true;
            return;
        }
        match &self.ud_suffix {
            Some(existing) if existing != suffix => self.invalid = true,
            Some(_) => {}
            None => self.ud_suffix = Some(suffix.to_vec()),
        }
        self.add_piece(literal);
    }

    fn add_piece(&mut self, literal: &[u8]) {
        let Some(quote) = memchr(b'"', literal) else {
            self.invalid = true;
            return;
        };
        let mut prefix = &literal[..quote];
        let raw = prefix.last() == Some(&b'R');
        if raw {
            prefix = &prefix[..prefix.len() - 1];
        }
        let Some(piece_ty) = encoding_prefix(prefix) else {
            self.invalid = true;
            return;
        };
        match (self.ty, piece_ty) {
            (Some(a), Some(b)) if a != b => {
                self.invalid = true;
                return;
            }
            (None, Some(b)) => self.ty = Some(b),
            _ => {}
        }

        let body = if raw {
            // prefix R " d-chars ( body ) d-chars "
            let Some(open) = memchr(b'(', literal) else {
                self.invalid = true;
                return;
            };
            let delim_len = open - quote - 1;
            let end = literal.len() - 2 - delim_len;
            if end < open + 1 {
                self.invalid = true;
                return;
            }
            Some(literal[open + 1..end].to_vec())
        } else if literal.len() >= quote + 2 {
            decode_escapes(&literal[quote + 1..literal.len() - 1])
        } else {
            None
        };
        match body {
            Some(bytes) => self.pieces.push(bytes),
            None => self.invalid = true,
        }
    }

    /// Emits the accumulated run as one event and resets. Does
    /// nothing when no string literal is pending.
    pub(crate) fn flush<S: PostTokenStream>(&mut self, sink: &mut S) {
        if self.sources.is_empty() {
            return;
        }
        let source = self.sources.join(&b" "[..]);
        let ty = self.ty.unwrap_or(FundamentalType::Char);

        let mut combined = String::new();
        let mut decodable = !self.invalid;
        for piece in &self.pieces {
            match std::str::from_utf8(piece) {
                Ok(s) => combined.push_str(s),
                Err(_) => {
                    decodable = false;
                    break;
                }
            }
        }
        if !decodable {
            sink.invalid(&source);
            *self = Self::default();
            return;
        }

        let mut data = encode_units(&combined, ty);
        data.resize(data.len() + ty.width(), 0);
        let n_elements = data.len() / ty.width();
        match self.ud_suffix.take() {
            Some(suffix) => {
                sink.user_defined_literal_string_array(&source, &suffix, n_elements, ty, &data);
            }
            None => sink.literal_array(&source, n_elements, ty, &data),
        }
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests;

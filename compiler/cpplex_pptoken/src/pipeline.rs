//! The assembled four-stage tokenizer.
//!
//! Bytes go in one at a time; [`PpTokenStream`] callbacks come out.
//! A start-of-file marker is injected ahead of the first byte so rules
//! that anchor at file start (the header-include form) can see it, and
//! an end-of-file marker is pushed by [`PpTokenizer::finish`], which
//! both flushes every in-flight scan and produces the final new-line
//! token on files that do not end with one.

use cpplex_regex::symbol::{END_OF_FILE, START_OF_FILE};
use tracing::debug;

use crate::comment::CommentStrip;
use crate::error::LexError;
use crate::pptoken::PpTokenPhase;
use crate::prephase::Prephase;
use crate::splice::Splice;
use crate::stream::{PpTokenStream, SymbolSink};

/// Streaming preprocessing tokenizer.
///
/// Owns its sink; [`PpTokenizer::finish`] hands it back once the final
/// `eof` callback has fired.
pub struct PpTokenizer<S: PpTokenStream> {
    chain: Prephase<Splice<CommentStrip<PpTokenPhase<S>>>>,
    started: bool,
}

impl<S: PpTokenStream> PpTokenizer<S> {
    pub fn new(sink: S) -> PpTokenizer<S> {
        PpTokenizer {
            chain: Prephase::new(Splice::new(CommentStrip::new(PpTokenPhase::new(sink)))),
            started: false,
        }
    }

    /// Tokenize a whole buffer and return the sink.
    pub fn tokenize(bytes: &[u8], sink: S) -> Result<S, LexError> {
        debug!(len = bytes.len(), "tokenizing buffer");
        let mut tokenizer = PpTokenizer::new(sink);
        tokenizer.feed(bytes)?;
        tokenizer.finish()
    }

    pub fn push_byte(&mut self, byte: u8) -> Result<(), LexError> {
        self.ensure_started()?;
        self.chain.push(u32::from(byte), &[byte])
    }

    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), LexError> {
        for &byte in bytes {
            self.push_byte(byte)?;
        }
        Ok(())
    }

    /// Signal end of input, flush everything, and return the sink.
    ///
    /// An empty input produces only the `eof` callback, no implicit
    /// new-line.
    pub fn finish(mut self) -> Result<S, LexError> {
        if self.started {
            self.chain.push(END_OF_FILE, &[])?;
        }
        let mut phase = self.chain.into_next().into_next().into_next();
        phase.sink_mut().eof();
        Ok(phase.into_sink())
    }

    fn ensure_started(&mut self) -> Result<(), LexError> {
        if !self.started {
            self.started = true;
            self.chain.push(START_OF_FILE, &[])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;

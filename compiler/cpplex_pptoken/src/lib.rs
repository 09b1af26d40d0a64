//! C++ preprocessing tokenizer.
//!
//! Turns a byte stream into the C++11 preprocessing-token stream through
//! four chained scanning phases, each a longest-match scanner over a
//! small rule table:
//!
//! 1. trigraphs and raw-string capture;
//! 2. backslash-newline removal, universal-character-names, UTF-8
//!    sequence packing, `/*` marking;
//! 3. comments collapse to one space, literal bodies are shielded;
//! 4. the token grammar proper, emitting [`PpTokenStream`] callbacks.
//!
//! Phases communicate in symbols, not bytes: one symbol per logical
//! character, with out-of-band values for start-of-file, end-of-file,
//! comment-begin, and raw-string content. Each symbol carries the source
//! bytes it stands for, so the token text that reaches the callbacks is
//! exactly the spelling that survived the earlier transformations.

mod comment;
mod error;
mod machine;
mod pipeline;
mod pptoken;
mod prephase;
mod splice;
mod stream;
mod tables;

pub use error::LexError;
pub use pipeline::PpTokenizer;
pub use stream::{PpEvent, PpTokenStream, Recorder};

//! Post-tokenization for the cpplex front end.
//!
//! Consumes the preprocessing-token stream produced by
//! `cpplex_pptoken` and turns each token into its classified form:
//! keywords and operators become simple tokens, identifiers stay
//! identifiers, and literals are decoded to a fundamental type plus
//! their object representation (native byte order, LP64 model).
//! Adjacent string literals are concatenated into a single array
//! literal on the way through.
//!
//! [`PostTokenizer`] is the entry point; it implements the pp-token
//! stream interface, so it can also sit directly behind a hand-driven
//! [`cpplex_pptoken::PpTokenizer`].

mod char_lit;
mod escape;
mod fundamental;
mod number;
mod post;
mod stream;
mod strings;
mod token;

pub use fundamental::FundamentalType;
pub use post::PostTokenizer;
pub use stream::{PostEvent, PostTokenStream, Recorder};
pub use token::{token_type, TokenType};

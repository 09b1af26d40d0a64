//! Regex rule algebra and NFA engine for the cpplex tokenizer.
//!
//! This crate is standalone (zero `cpplex_*` dependencies) so the rule
//! engine can be reused and fuzzed without pulling in the tokenizer:
//!
//! - [`Chset`]: sorted disjoint code-point range sets with union,
//!   complement and difference.
//! - [`Rule`]: the combinator algebra (`>>`, `|`, `star`, `plus`, `opt`,
//!   leaf negation/difference).
//! - [`Nfa`] / [`Machine`]: compilation by structural recursion into an
//!   index-addressed state arena, and one-symbol-at-a-time simulation
//!   with epsilon closure.
//! - [`symbol`]: the extended `u32` input domain, including the phase
//!   sentinels and packed-UTF-8 helpers.

mod chset;
mod nfa;
pub mod rule;
pub mod symbol;

pub use chset::Chset;
pub use nfa::{matches, matches_str, Machine, Nfa};
pub use rule::{Rule, RuleError};
pub use symbol::Symbol;

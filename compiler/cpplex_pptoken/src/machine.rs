//! Maximal-munch scanner over a set of compiled rules.
//!
//! [`TokenizerMachine`] runs one overlapping scan per input position: each
//! incoming character both advances every in-flight scan and opens a fresh
//! one starting at that character. A scan tracks one live [`Machine`] per
//! rule plus its best candidate so far (the furthest end position any of
//! its rules accepted at, with the winning rule's kind).
//!
//! # Invariant
//!
//! Emitted tokens tile the input: whenever a scan records a candidate
//! ending at position `e`, every scan whose start lies strictly between
//! this scan's start and `e` is discarded — no token may begin inside a
//! longer match that started earlier. Only the earliest in-flight scan may
//! finalize, and it does so only once all of its machines are dead, so a
//! candidate is never emitted while a longer match is still reachable.
//!
//! Ties between rules that accept at the same end position go to the rule
//! declared first.

use std::collections::{BTreeMap, VecDeque};

use cpplex_regex::{Machine, Rule, Symbol};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::LexError;

/// One input character as a phase sees it: the symbol the rule engine
/// classifies plus the source bytes it stands for.
///
/// The two are decoupled on purpose. A raw-string body byte travels as an
/// out-of-band symbol with its original byte as text; a universal
/// character name travels as one packed symbol with multi-byte text; the
/// end-of-file marker has no text at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhaseChar {
    pub sym: Symbol,
    pub text: SmallVec<[u8; 4]>,
}

impl PhaseChar {
    pub fn new(sym: Symbol, text: &[u8]) -> PhaseChar {
        PhaseChar {
            sym,
            text: SmallVec::from_slice(text),
        }
    }
}

/// A finished token: the kind of the winning rule and the characters the
/// match spans, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lexeme<K> {
    pub kind: K,
    pub chars: Vec<PhaseChar>,
}

impl<K> Lexeme<K> {
    /// The token's source text, concatenated from its characters.
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for c in &self.chars {
            out.extend_from_slice(&c.text);
        }
        out
    }
}

/// One in-flight scan: live machines for every rule, started at a single
/// input position, plus the best accept recorded so far.
struct Scan<K> {
    machines: Vec<(Machine, K)>,
    /// `(end, kind)` of the longest accept; `end` is an absolute symbol
    /// index one past the final symbol of the match.
    candidate: Option<(u64, K)>,
}

/// The longest-match scanner. `K` is the phase's token-kind enum.
pub(crate) struct TokenizerMachine<K> {
    /// Pristine machines in declaration order, cloned for each new scan.
    rules: Vec<(Machine, K)>,
    /// In-flight scans keyed by absolute start index.
    ongoing: BTreeMap<u64, Scan<K>>,
    /// Characters not yet emitted as part of a token, starting at
    /// absolute index `emitted`.
    pending: VecDeque<PhaseChar>,
    /// Total symbols consumed.
    processed: u64,
    /// Index one past the last emitted token.
    emitted: u64,
}

impl<K: Copy + PartialEq + std::fmt::Debug> TokenizerMachine<K> {
    /// Compile the rule table. Order matters: earlier rules win ties.
    pub fn new(rules: &[(Rule, K)]) -> TokenizerMachine<K> {
        TokenizerMachine {
            rules: rules
                .iter()
                .map(|(rule, kind)| (Machine::new(rule), *kind))
                .collect(),
            ongoing: BTreeMap::new(),
            pending: VecDeque::new(),
            processed: 0,
            emitted: 0,
        }
    }

    /// Consume one character, returning every token finalized by it.
    ///
    /// Several tokens can complete on a single character (the end-of-file
    /// symbol typically flushes a token and then matches a rule of its
    /// own), so callers must drain the whole result.
    pub fn process(&mut self, c: PhaseChar) -> Result<SmallVec<[Lexeme<K>; 2]>, LexError> {
        self.pending.push_back(c.clone());
        self.ongoing.insert(self.processed, Scan {
            machines: self.rules.clone(),
            candidate: None,
        });
        self.processed += 1;

        let mut out = SmallVec::new();
        let starts: Vec<u64> = self.ongoing.keys().copied().collect();
        for start in starts {
            // Pruned by an earlier scan's longer match on this same pass.
            let Some(scan) = self.ongoing.get_mut(&start) else {
                continue;
            };

            let mut best: Option<(u64, K)> = scan.candidate;
            for (machine, kind) in &mut scan.machines {
                if machine.process(c.sym) && best.is_none_or(|(end, _)| end < self.processed) {
                    best = Some((self.processed, *kind));
                }
            }
            let dead = scan.machines.iter().all(|(m, _)| m.forever_unmatched());
            let extended = best != scan.candidate;
            scan.candidate = best;

            if extended {
                // A longer match from an earlier start annexes every scan
                // that began inside it.
                let upper = best.map_or(start, |(end, _)| end);
                let doomed: Vec<u64> = self
                    .ongoing
                    .range(start + 1..=upper)
                    .map(|(&k, _)| k)
                    .collect();
                for k in doomed {
                    self.ongoing.remove(&k);
                }
            }

            if dead && self.ongoing.keys().next() == Some(&start) {
                let lexeme = self.finalize(start, best)?;
                trace!(kind = ?lexeme.kind, len = lexeme.chars.len(), "token");
                out.push(lexeme);
            }
        }
        Ok(out)
    }

    /// Retire the earliest scan, emitting its candidate or failing.
    fn finalize(&mut self, start: u64, candidate: Option<(u64, K)>) -> Result<Lexeme<K>, LexError> {
        self.ongoing.remove(&start);
        match candidate {
            Some((end, kind)) => {
                debug_assert_eq!(start, self.emitted);
                #[allow(clippy::cast_possible_truncation, reason = "pending never exceeds one token")]
                let take = (end - self.emitted) as usize;
                let chars: Vec<PhaseChar> = self.pending.drain(..take).collect();
                self.emitted = end;
                Ok(Lexeme { kind, chars })
            }
            None => {
                let mut text = Vec::new();
                for c in &self.pending {
                    text.extend_from_slice(&c.text);
                }
                if self.processed - self.emitted <= 1 {
                    Err(LexError::invalid(&text))
                } else {
                    Err(LexError::incomplete(&text))
                }
            }
        }
    }

}

#[cfg(test)]
mod tests;

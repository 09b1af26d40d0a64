//! NFA compilation and simulation.
//!
//! A [`Rule`] compiles by structural recursion into an arena of states
//! ([`Nfa`]), each owning guarded transitions that point at another state
//! by index or at the distinguished accept marker. Repetition introduces
//! back-edges, so the graph is cyclic; arena indices keep ownership flat.
//!
//! Simulation is on-the-fly subset construction: a [`Machine`] holds the
//! epsilon-closed set of live state indices and consumes one symbol at a
//! time. No DFA is ever precompiled — the rule alphabets are tiny and the
//! scanner clones machines per in-flight scan, so sharing the compiled
//! [`Nfa`] behind an `Rc` is what matters.

use std::rc::Rc;

use smallvec::{smallvec, SmallVec};

use crate::chset::Chset;
use crate::rule::Rule;
use crate::symbol::Symbol;

/// Where a transition leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Target {
    /// Another state, by arena index.
    State(u32),
    /// The accept marker.
    Accept,
}

/// One state: its outgoing transitions. An empty guard is an epsilon edge.
#[derive(Clone, Debug, Default)]
struct StateNode {
    transitions: Vec<(Chset, Target)>,
}

/// A compiled automaton. Immutable after construction.
#[derive(Debug)]
pub struct Nfa {
    states: Vec<StateNode>,
    start: u32,
}

/// A sub-automaton under construction: its start state plus the addresses
/// of its accept edges, which splicing retargets.
struct Fragment {
    start: u32,
    /// `(state, transition index)` pairs whose target is currently Accept.
    endings: Vec<(u32, usize)>,
}

impl Nfa {
    /// Compile a rule into an automaton.
    pub fn compile(rule: &Rule) -> Nfa {
        let mut states = Vec::new();
        let frag = build(rule, &mut states);
        Nfa {
            states,
            start: frag.start,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "rule trees are hand-written and compile to far fewer than 2^32 states"
)]
fn push_state(states: &mut Vec<StateNode>, node: StateNode) -> u32 {
    states.push(node);
    (states.len() - 1) as u32
}

fn build(rule: &Rule, states: &mut Vec<StateNode>) -> Fragment {
    match rule {
        Rule::Chset(set) => {
            let s = push_state(
                states,
                StateNode {
                    transitions: vec![(set.clone(), Target::Accept)],
                },
            );
            Fragment {
                start: s,
                endings: vec![(s, 0)],
            }
        }
        Rule::Seq(subs) if subs.is_empty() => {
            // Empty sequence (the `opt` branch): a single epsilon edge to
            // accept, matching the empty string.
            let s = push_state(
                states,
                StateNode {
                    transitions: vec![(Chset::new(), Target::Accept)],
                },
            );
            Fragment {
                start: s,
                endings: vec![(s, 0)],
            }
        }
        Rule::Seq(subs) => {
            let frags: Vec<Fragment> = subs.iter().map(|r| build(r, states)).collect();
            for pair in frags.windows(2) {
                let next_start = pair[1].start;
                for &(s, t) in &pair[0].endings {
                    states[s as usize].transitions[t].1 = Target::State(next_start);
                }
            }
            let start = frags[0].start;
            let endings = frags
                .into_iter()
                .next_back()
                .map(|f| f.endings)
                .unwrap_or_default();
            Fragment { start, endings }
        }
        Rule::Alt(subs) => {
            let frags: Vec<Fragment> = subs.iter().map(|r| build(r, states)).collect();
            let mut transitions = Vec::with_capacity(frags.len());
            let mut endings = Vec::new();
            for frag in frags {
                transitions.push((Chset::new(), Target::State(frag.start)));
                endings.extend(frag.endings);
            }
            let start = push_state(states, StateNode { transitions });
            Fragment { start, endings }
        }
        Rule::Star(sub) => {
            let frag = build(sub, states);
            // Loop each accept edge back to the sub-automaton's start by
            // duplicating it with a retargeted copy.
            for &(s, t) in &frag.endings {
                let back = (states[s as usize].transitions[t].0.clone(), Target::State(frag.start));
                states[s as usize].transitions.push(back);
            }
            let start = push_state(
                states,
                StateNode {
                    transitions: vec![
                        (Chset::new(), Target::Accept),
                        (Chset::new(), Target::State(frag.start)),
                    ],
                },
            );
            let mut endings = frag.endings;
            endings.push((start, 0));
            Fragment { start, endings }
        }
    }
}

/// A live simulation of one compiled automaton.
///
/// Cloning is cheap — the compiled [`Nfa`] is shared behind an `Rc`, only
/// the live state set is copied. The longest-match scanner clones one
/// machine per rule per in-flight scan origin.
#[derive(Clone, Debug)]
pub struct Machine {
    nfa: Rc<Nfa>,
    states: SmallVec<[u32; 8]>,
}

impl Machine {
    /// Compile `rule` and place the machine in its initial configuration.
    ///
    /// The initial epsilon closure may already reach accept (rules that
    /// match the empty string); that signal is deliberately dropped — a
    /// candidate token is at least one symbol long.
    pub fn new(rule: &Rule) -> Machine {
        let nfa = Rc::new(Nfa::compile(rule));
        let mut machine = Machine {
            states: smallvec![nfa.start],
            nfa,
        };
        machine.close_epsilon();
        machine
    }

    /// Consume one symbol. Returns `true` if the automaton reached accept
    /// on this symbol (directly or through the closing epsilon edges).
    pub fn process(&mut self, sym: Symbol) -> bool {
        let mut next: SmallVec<[u32; 8]> = SmallVec::new();
        let mut matched = false;
        for &s in &self.states {
            for (guard, target) in &self.nfa.states[s as usize].transitions {
                if guard.contains(sym) {
                    match *target {
                        Target::Accept => matched = true,
                        Target::State(n) => {
                            if !next.contains(&n) {
                                next.push(n);
                            }
                        }
                    }
                }
            }
        }
        self.states = next;
        matched | self.close_epsilon()
    }

    /// The state set is empty: no continuation of the input can match.
    pub fn forever_unmatched(&self) -> bool {
        self.states.is_empty()
    }

    /// Close the live set under epsilon transitions (breadth-first walk
    /// over empty-guard edges). Returns `true` if accept is
    /// epsilon-reachable.
    fn close_epsilon(&mut self) -> bool {
        let mut matched = false;
        let mut queue: SmallVec<[u32; 8]> = self.states.clone();
        let mut closed: SmallVec<[u32; 8]> = SmallVec::new();
        while let Some(s) = queue.pop() {
            if closed.contains(&s) {
                continue;
            }
            for (guard, target) in &self.nfa.states[s as usize].transitions {
                if guard.is_empty() {
                    match *target {
                        Target::Accept => matched = true,
                        Target::State(n) => {
                            if !closed.contains(&n) {
                                queue.push(n);
                            }
                        }
                    }
                }
            }
            closed.push(s);
        }
        self.states = closed;
        matched
    }
}

/// Whether `syms`, in full, is accepted by `rule`.
///
/// Runs a fresh machine over the symbols; the answer is the match signal
/// of the final symbol, so trailing garbage fails even when a prefix
/// matched. The empty input never matches.
pub fn matches<I>(rule: &Rule, syms: I) -> bool
where
    I: IntoIterator<Item = Symbol>,
{
    let mut machine = Machine::new(rule);
    let mut matched = false;
    for sym in syms {
        matched = machine.process(sym);
    }
    matched
}

/// [`matches`] over a string's bytes — the common case for suffix
/// classification, where the lexeme is already known to be ASCII.
pub fn matches_str(rule: &Rule, text: &str) -> bool {
    matches(rule, text.bytes().map(Symbol::from))
}

//! Code-point range sets.
//!
//! A [`Chset`] is an ordered set of disjoint inclusive `[lo, hi]` ranges
//! over the extended [`Symbol`] domain. All operations preserve the
//! sorted/disjoint invariant; complement and difference run in O(ranges)
//! as a single merge over the sorted range lists.

use crate::symbol::{Symbol, MAX_CODE, MIN_CODE};

/// An ordered set of disjoint, inclusive symbol ranges.
///
/// # Invariant
///
/// `ranges` is sorted by `lo`, ranges never overlap, and adjacent ranges
/// are coalesced (`[0,4] [5,9]` is stored as `[0,9]`), giving every set a
/// canonical representation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chset {
    ranges: Vec<(Symbol, Symbol)>,
}

impl Chset {
    /// The empty set. Doubles as the epsilon guard on automaton edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding a single symbol.
    pub fn of(sym: Symbol) -> Self {
        let mut out = Self::new();
        out.insert(sym, sym);
        out
    }

    /// Build from a character-class spec string, e.g. `"a-zA-Z_"`.
    ///
    /// A `-` between two characters denotes an inclusive range; a leading
    /// or trailing `-` is the literal character. Characters contribute
    /// their scalar value, so the spec alphabet is effectively ASCII plus
    /// whatever escapes the Rust string literal already resolved.
    pub fn spec(spec: &str) -> Self {
        let chars: Vec<char> = spec.chars().collect();
        let mut out = Self::new();
        let mut i = 0;
        while i < chars.len() {
            let lo = chars[i] as Symbol;
            i += 1;
            if i + 1 < chars.len() && chars[i] == '-' {
                out.insert(lo, chars[i + 1] as Symbol);
                i += 2;
            } else {
                out.insert(lo, lo);
            }
        }
        out
    }

    /// Build from explicit inclusive ranges. Inverted pairs are skipped.
    pub fn from_ranges(ranges: &[(Symbol, Symbol)]) -> Self {
        let mut out = Self::new();
        for &(lo, hi) in ranges {
            if lo <= hi {
                out.insert(lo, hi);
            }
        }
        out
    }

    /// The stored ranges, sorted and disjoint.
    pub fn ranges(&self) -> &[(Symbol, Symbol)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Membership test by binary search over the sorted ranges.
    pub fn contains(&self, sym: Symbol) -> bool {
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if sym < lo {
                    std::cmp::Ordering::Greater
                } else if sym > hi {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Insert an inclusive range, merging it with any overlapping or
    /// adjacent neighbours.
    fn insert(&mut self, lo: Symbol, hi: Symbol) {
        debug_assert!(lo <= hi);
        // Find the insertion window: every stored range that overlaps or
        // touches [lo, hi] gets folded into it.
        let mut merged_lo = lo;
        let mut merged_hi = hi;
        // Ranges ending at lo - 1 are adjacent and get merged too.
        let touch = lo.saturating_sub(1);
        let start = self.ranges.partition_point(|&(_, h)| h < touch);
        let mut end = start;
        while end < self.ranges.len() && self.ranges[end].0 <= hi.saturating_add(1) {
            merged_lo = merged_lo.min(self.ranges[end].0);
            merged_hi = merged_hi.max(self.ranges[end].1);
            end += 1;
        }
        self.ranges.splice(start..end, [(merged_lo, merged_hi)]);
    }

    /// Set union.
    pub fn union(&self, other: &Chset) -> Chset {
        let mut out = self.clone();
        for &(lo, hi) in &other.ranges {
            out.insert(lo, hi);
        }
        out
    }

    /// Complement within `[MIN_CODE, MAX_CODE]`.
    ///
    /// Symbols above `MAX_CODE` (the comment-begin and end-of-file
    /// sentinels) are never produced by complement; rules that want them
    /// must name them explicitly.
    pub fn complement(&self) -> Chset {
        let mut out = Chset::new();
        let mut next = MIN_CODE;
        for &(lo, hi) in &self.ranges {
            if lo > MAX_CODE {
                break;
            }
            if lo > next {
                out.ranges.push((next, lo - 1));
            }
            if hi >= MAX_CODE {
                return out;
            }
            next = next.max(hi + 1);
        }
        if next <= MAX_CODE {
            out.ranges.push((next, MAX_CODE));
        }
        out
    }

    /// Set difference: every symbol of `self` not in `other`.
    ///
    /// Single merge over the two sorted lists; each range of `self` is
    /// clipped against the overlapping ranges of `other`, splitting where
    /// a hole punches through the middle.
    pub fn difference(&self, other: &Chset) -> Chset {
        let mut out = Chset::new();
        let mut cut = other.ranges.iter().copied().peekable();
        for &(lo, hi) in &self.ranges {
            let mut lo = lo;
            loop {
                // Skip cuts entirely below the remaining piece.
                while matches!(cut.peek(), Some(&(_, ch)) if ch < lo) {
                    cut.next();
                }
                match cut.peek() {
                    Some(&(clo, chi)) if clo <= hi => {
                        if clo > lo {
                            out.ranges.push((lo, clo - 1));
                        }
                        if chi >= hi {
                            // Cut covers the rest of this range; keep the
                            // cut for the next range, it may reach it too.
                            break;
                        }
                        lo = chi + 1;
                        cut.next();
                    }
                    _ => {
                        out.ranges.push((lo, hi));
                        break;
                    }
                }
            }
        }
        out
    }
}

impl std::ops::BitOr for Chset {
    type Output = Chset;
    fn bitor(self, rhs: Chset) -> Chset {
        self.union(&rhs)
    }
}

impl std::ops::Not for Chset {
    type Output = Chset;
    fn not(self) -> Chset {
        self.complement()
    }
}

impl std::ops::Sub for Chset {
    type Output = Chset;
    fn sub(self, rhs: Chset) -> Chset {
        self.difference(&rhs)
    }
}

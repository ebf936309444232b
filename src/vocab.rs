//! Merge vocabulary.
//!
//! Every merged symbol is stored as the pair it was built from rather than as
//! its flattened bytes. Expansions are produced on demand by walking the pair
//! tree, so memory stays linear in the number of merges however deep the
//! nesting gets.

use crate::pair::Pair;
use crate::symbol::{is_byte, Symbol, FIRST_SYNTHETIC};

/// Append-only mapping from synthetic symbol to its two constituents.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// `rules[i]` defines symbol `FIRST_SYNTHETIC + i`.
    rules: Vec<Pair>,
    /// Expanded byte length of each rule, kept so expansion can size its buffer.
    lengths: Vec<usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of merged symbols.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Records the definition of the next synthetic symbol.
    ///
    /// `id` must be the next unassigned id; both halves of `pair` must
    /// already be known.
    pub(crate) fn push(&mut self, id: Symbol, pair: Pair) {
        debug_assert_eq!(
            usize::from(id),
            usize::from(FIRST_SYNTHETIC) + self.rules.len(),
            "vocabulary ids must be assigned in order"
        );
        let length = self.expanded_len(pair.left).unwrap_or(0)
            + self.expanded_len(pair.right).unwrap_or(0);
        self.rules.push(pair);
        self.lengths.push(length);
    }

    /// The pair a synthetic symbol was built from. `None` for bytes and unknown ids.
    pub fn rule(&self, symbol: Symbol) -> Option<Pair> {
        let index = usize::from(symbol.checked_sub(FIRST_SYNTHETIC)?);
        self.rules.get(index).copied()
    }

    /// Returns true if the symbol is a byte or a merged symbol defined here.
    pub fn contains(&self, symbol: Symbol) -> bool {
        is_byte(symbol) || self.rule(symbol).is_some()
    }

    /// Number of bytes the symbol expands to.
    pub fn expanded_len(&self, symbol: Symbol) -> Option<usize> {
        if is_byte(symbol) {
            return Some(1);
        }
        let index = usize::from(symbol - FIRST_SYNTHETIC);
        self.lengths.get(index).copied()
    }

    /// Appends the byte expansion of `symbol` to `out`.
    ///
    /// Returns `false` (leaving `out` untouched) if the symbol is unknown.
    pub fn expand_into(&self, symbol: Symbol, out: &mut Vec<u8>) -> bool {
        let Some(length) = self.expanded_len(symbol) else {
            return false;
        };
        out.reserve(length);

        let mut stack = vec![symbol];
        while let Some(current) = stack.pop() {
            if is_byte(current) {
                out.push(current as u8);
            } else if let Some(pair) = self.rule(current) {
                // Right first so the left half is expanded first
                stack.push(pair.right);
                stack.push(pair.left);
            }
        }
        true
    }

    /// Returns the byte expansion of a symbol.
    pub fn expand(&self, symbol: Symbol) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        self.expand_into(symbol, &mut out).then_some(out)
    }

    /// Concatenates the expansions of a whole token sequence.
    pub fn expand_all<I: IntoIterator<Item = Symbol>>(&self, tokens: I) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        for token in tokens {
            if !self.expand_into(token, &mut out) {
                return None;
            }
        }
        Some(out)
    }

    /// Merge rules in creation order, as `(new symbol, pair)`.
    pub fn merges(&self) -> impl Iterator<Item = (Symbol, Pair)> + '_ {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, &pair)| (FIRST_SYNTHETIC + i as Symbol, pair))
    }
}

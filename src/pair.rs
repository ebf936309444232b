use crate::symbol::Symbol;
use std::fmt;

/// Two symbols that sit next to each other in live traversal order.
///
/// A pair is a value, not a position: every occurrence of the same two
/// symbols is the same `Pair`. Ordering is lexicographic on `(left, right)`,
/// which the field order gives us through the derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair {
    pub left: Symbol,
    pub right: Symbol,
}

impl Pair {
    pub fn new(left: Symbol, right: Symbol) -> Self {
        Self { left, right }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}
